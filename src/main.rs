use axum::Router;
use routecalc::config::{Config, StoreConfig};
use routecalc::db::{MemoryPreferenceRepository, PgPreferenceRepository, PreferenceRepository};
use routecalc::services::postgrest::PostgrestClient;
use routecalc::services::preference_service::PreferenceService;
use routecalc::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routecalc=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting RouteCalc API server");
    tracing::info!(
        store = ?config.store.backend(),
        "Configuration loaded successfully"
    );

    // Initialize preference store
    let repo: Arc<dyn PreferenceRepository> = match config.store {
        StoreConfig::Postgres { ref database_url } => {
            tracing::info!("Connecting to database...");
            let db_pool = routecalc::db::create_pool(database_url).await?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&db_pool).await?;
            tracing::info!("Database migrations completed");

            Arc::new(PgPreferenceRepository::new(db_pool))
        }
        StoreConfig::Postgrest {
            ref base_url,
            ref api_key,
            ref table,
        } => {
            tracing::info!("Using PostgREST preference store at {}", base_url);
            Arc::new(PostgrestClient::with_table(
                base_url.clone(),
                api_key.clone(),
                table.clone(),
            ))
        }
        StoreConfig::Memory => {
            tracing::warn!("No preference store configured. Using in-memory store.");
            Arc::new(MemoryPreferenceRepository::new())
        }
    };

    // Create application state
    let state = Arc::new(AppState {
        preferences: PreferenceService::new(repo, config.default_currency.clone()),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", routecalc::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
