use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{handlers, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staff Service API",
        version = "1.0.0",
        description = "Member, ng-pair, shift-request, and pediatric-date management API with Redis caching"
    ),
    paths(
        // Member endpoints
        handlers::member_handlers::create_member,
        handlers::member_handlers::get_member_by_id,
        handlers::member_handlers::list_members,
        handlers::member_handlers::list_all_members,
        handlers::member_handlers::update_member,
        handlers::member_handlers::delete_member,
        // Ng-pair endpoints
        handlers::ng_pair_handlers::create_ng_pair,
        handlers::ng_pair_handlers::list_ng_pairs,
        handlers::ng_pair_handlers::delete_ng_pair,
        // Shift request endpoints
        handlers::shift_request_handlers::create_shift_request,
        handlers::shift_request_handlers::list_shift_requests,
        handlers::shift_request_handlers::update_shift_request,
        handlers::shift_request_handlers::delete_shift_request,
        // Pediatric date endpoints
        handlers::pediatric_date_handlers::create_pediatric_date,
        handlers::pediatric_date_handlers::list_pediatric_dates,
        handlers::pediatric_date_handlers::delete_pediatric_date,
    ),
    components(schemas(
        shared::PaginationParams,
        crate::presentation::MemberSerializer,
        crate::presentation::NgPairSerializer,
        crate::presentation::ShiftRequestSerializer,
        crate::presentation::PediatricDateSerializer,
        crate::api::requests::CreateMemberRequest,
        crate::api::requests::UpdateMemberRequest,
        crate::api::requests::CreateNgPairRequest,
        crate::api::requests::CreateShiftRequestRequest,
        crate::api::requests::UpdateShiftRequestRequest,
        crate::api::requests::CreatePediatricDateRequest,
    )),
    tags(
        (name = "members", description = "Member management endpoints"),
        (name = "ng-pairs", description = "Forbidden night-shift pairing endpoints"),
        (name = "shift-requests", description = "Day-off / paid-leave / day-shift request endpoints"),
        (name = "pediatric-dates", description = "Pediatric-doctor date flag endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let member_routes = Router::new()
        .route("/members", post(handlers::member_handlers::create_member))
        .route("/members", get(handlers::member_handlers::list_members))
        .route(
            "/members/all",
            get(handlers::member_handlers::list_all_members),
        )
        .route(
            "/members/:id",
            get(handlers::member_handlers::get_member_by_id),
        )
        .route(
            "/members/:id",
            put(handlers::member_handlers::update_member),
        )
        .route(
            "/members/:id",
            delete(handlers::member_handlers::delete_member),
        );

    let ng_pair_routes = Router::new()
        .route(
            "/ng-pairs",
            post(handlers::ng_pair_handlers::create_ng_pair),
        )
        .route("/ng-pairs", get(handlers::ng_pair_handlers::list_ng_pairs))
        .route(
            "/ng-pairs/:id",
            delete(handlers::ng_pair_handlers::delete_ng_pair),
        );

    let shift_request_routes = Router::new()
        .route(
            "/shift-requests",
            post(handlers::shift_request_handlers::create_shift_request),
        )
        .route(
            "/shift-requests",
            get(handlers::shift_request_handlers::list_shift_requests),
        )
        .route(
            "/shift-requests/:id",
            put(handlers::shift_request_handlers::update_shift_request),
        )
        .route(
            "/shift-requests/:id",
            delete(handlers::shift_request_handlers::delete_shift_request),
        );

    let pediatric_date_routes = Router::new()
        .route(
            "/pediatric-dates",
            post(handlers::pediatric_date_handlers::create_pediatric_date),
        )
        .route(
            "/pediatric-dates",
            get(handlers::pediatric_date_handlers::list_pediatric_dates),
        )
        .route(
            "/pediatric-dates/:id",
            delete(handlers::pediatric_date_handlers::delete_pediatric_date),
        );

    let api_router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(member_routes)
        .merge(ng_pair_routes)
        .merge(shift_request_routes)
        .merge(pediatric_date_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
