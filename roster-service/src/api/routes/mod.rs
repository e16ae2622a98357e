use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::state::AppState;
use crate::presentation::{
    EditResultSerialize, GenerateResultSerialize, ScheduleSerialize, ScheduleViewSerialize,
    ShiftAssignmentSerialize, ShiftRequestSerialize, UnfulfilledRequestSerialize,
};
use shared::{RequestType, ScheduleStatus, ShiftType};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster Service API",
        version = "1.0.0",
        description = "Constraint-based nurse shift roster generation API"
    ),
    paths(
        crate::api::handlers::schedule_handlers::generate_schedule,
        crate::api::handlers::schedule_handlers::get_schedule,
        crate::api::handlers::schedule_handlers::edit_assignment,
        crate::api::handlers::shift_request_handlers::create_shift_request,
        crate::api::handlers::shift_request_handlers::list_shift_requests,
    ),
    components(schemas(
        crate::api::requests::EditAssignmentRequest,
        crate::api::requests::CreateShiftRequestRequest,
        GenerateResultSerialize,
        ScheduleSerialize,
        ScheduleViewSerialize,
        ShiftAssignmentSerialize,
        UnfulfilledRequestSerialize,
        EditResultSerialize,
        ShiftRequestSerialize,
        ScheduleStatus,
        ShiftType,
        RequestType,
    )),
    tags(
        (name = "schedules", description = "Roster generation, retrieval, and single-assignment edits"),
        (name = "shift-requests", description = "Day-off / paid-leave / day-shift preference requests")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let schedule_routes = Router::new()
        .route(
            "/schedules/:year_month/generate",
            post(handlers::schedule_handlers::generate_schedule),
        )
        .route(
            "/schedules/:year_month",
            get(handlers::schedule_handlers::get_schedule),
        )
        .route(
            "/schedules/:year_month/assignments/:member_id/:date",
            patch(handlers::schedule_handlers::edit_assignment),
        );

    let shift_request_routes = Router::new()
        .route(
            "/shift-requests",
            post(handlers::shift_request_handlers::create_shift_request),
        )
        .route(
            "/shift-requests",
            get(handlers::shift_request_handlers::list_shift_requests),
        );

    let api_router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(schedule_routes)
        .merge(shift_request_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
