//! ICT Lab Server - School equipment maintenance platform

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ictlab_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ictlab_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ICT Lab Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/me", get(api::auth::me))
        // Equipment inventory
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        // Tickets
        .route("/tickets", get(api::tickets::list_tickets))
        .route("/tickets", post(api::tickets::create_ticket))
        .route("/tickets/:id", get(api::tickets::get_ticket))
        .route("/tickets/:id", put(api::tickets::update_ticket))
        .route("/tickets/:id", delete(api::tickets::delete_ticket))
        .route("/tickets/:id/comments", get(api::tickets::list_comments))
        .route("/tickets/:id/comments", post(api::tickets::create_comment))
        // Reports
        .route("/reports/frequent-issues", get(api::reports::frequent_issues))
        .route("/reports/turnaround-time", get(api::reports::turnaround_time))
        .route("/reports/equipment-status", get(api::reports::equipment_status))
        // Analytics
        .route(
            "/analytics/equipment-health",
            get(api::analytics::equipment_health_overview),
        )
        .route(
            "/analytics/equipment-health/:id",
            get(api::analytics::equipment_health),
        )
        .route(
            "/analytics/preventive-maintenance",
            get(api::analytics::preventive_maintenance),
        )
        .route(
            "/analytics/maintenance-schedule",
            get(api::analytics::maintenance_schedule),
        )
        .route(
            "/analytics/maintenance-budget",
            get(api::analytics::maintenance_budget),
        )
        .route("/analytics/issue-patterns", get(api::analytics::issue_patterns))
        .route(
            "/analytics/equipment-failure-patterns",
            get(api::reports::failure_patterns),
        )
        .route("/analytics/school-issues", get(api::reports::school_issues))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
