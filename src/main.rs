use blog_api::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    repository::{PostgresRepository, RepositoryState},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Asynchronous entry point: configuration, logging, database, HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration loading (fail-fast on missing production secrets).
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging filter: RUST_LOG wins, with sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blog_api=debug,tower_http=info,axum=trace".into());

    // 3. Log format by environment: pretty for humans locally, JSON for log
    // aggregators in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Database pool + migrations.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.db_url)
        .await
        .expect("FATAL: Failed to connect to Postgres. Check DATABASE_URL.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("FATAL: Failed to run database migrations.");

    let repo = Arc::new(PostgresRepository::new(pool)) as RepositoryState;

    // 5. Unified state assembly and server startup.
    let app_state = AppState { repo, config };
    let app = create_router(app_state);

    let listener = TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on 0.0.0.0:3000");
    tracing::info!("API Documentation (Swagger UI) available at: http://localhost:3000/swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
