mod api;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use domain::repositories::{
    MemberRepository, NgPairRepository, PediatricDateRepository, ShiftRequestRepository,
};
use infrastructure::{
    config::Settings,
    database, redis,
    repositories::{
        PostgresMemberRepository, PostgresNgPairRepository, PostgresPediatricDateRepository,
        PostgresShiftRequestRepository,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staff_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Staff Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let redis_pool = redis::create_redis_pool(&settings.redis.url).await?;
    tracing::info!("Redis connection established");

    let member_repo: Arc<dyn MemberRepository> =
        Arc::new(PostgresMemberRepository::new(db_pool.clone()));
    let ng_pair_repo: Arc<dyn NgPairRepository> =
        Arc::new(PostgresNgPairRepository::new(db_pool.clone()));
    let shift_request_repo: Arc<dyn ShiftRequestRepository> =
        Arc::new(PostgresShiftRequestRepository::new(db_pool.clone()));
    let pediatric_date_repo: Arc<dyn PediatricDateRepository> =
        Arc::new(PostgresPediatricDateRepository::new(db_pool.clone()));

    tracing::info!("Repositories initialized");

    let app_state = AppState::new(
        member_repo,
        ng_pair_repo,
        shift_request_repo,
        pediatric_date_repo,
        redis_pool,
    );

    let app = api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Staff Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
