mod api;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use domain::repositories::{ScheduleRepository, ShiftRequestRepository};
use infrastructure::{
    config::Settings,
    database,
    repositories::{PostgresScheduleRepository, PostgresShiftRequestRepository},
    staff_client::{HttpStaffServiceClient, StaffServiceClient},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let schedule_repo: Arc<dyn ScheduleRepository> =
        Arc::new(PostgresScheduleRepository::new(db_pool.clone()));
    let shift_request_repo: Arc<dyn ShiftRequestRepository> =
        Arc::new(PostgresShiftRequestRepository::new(db_pool.clone()));
    let staff_client: Arc<dyn StaffServiceClient> =
        Arc::new(HttpStaffServiceClient::new(settings.staff_service.url.clone()));

    tracing::info!("Repositories and collaborator client initialized");

    let app_state = AppState::new(schedule_repo, shift_request_repo, staff_client);

    let app = api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Roster Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
