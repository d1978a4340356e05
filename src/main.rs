//! Profile CMS Backend
//!
//! REST backend for a single-professional marketing site, with MongoDB persistence.

mod api;
mod config;
mod db;
mod errors;
mod gateway;
mod models;
mod notify;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, CorsOrigins};
use db::MongoStore;
use gateway::Gateway;
use notify::{ContactNotifier, SmtpNotifier};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
    pub notifier: Option<Arc<dyn ContactNotifier>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Profile CMS Backend");
    tracing::info!("Database name: {}", config.db_name);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Connect to the document store
    let (client, db) = db::connect(&config.mongo_url, &config.db_name).await?;
    let gateway = Arc::new(Gateway::new(Arc::new(MongoStore::new(db))));

    let notifier: Option<Arc<dyn ContactNotifier>> = match &config.smtp {
        Some(smtp) => {
            tracing::info!("Contact notifications enabled via {}", smtp.host);
            let notifier: Arc<dyn ContactNotifier> = Arc::new(SmtpNotifier::from_config(smtp)?);
            Some(notifier)
        }
        None => {
            tracing::warn!("SMTP not configured. Contact notifications are disabled");
            None
        }
    };

    let state = AppState { gateway, notifier };

    // Build router
    let app = create_router(state, &config.cors_origins);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing store connection");
    client.shutdown().await;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState, origins: &CorsOrigins) -> Router {
    let api_routes = Router::new()
        .route("/api", get(api::root))
        .route("/api/", get(api::root))
        // Status checks
        .route(
            "/api/status",
            get(api::list_status_checks).post(api::create_status_check),
        )
        // Contact form
        .route(
            "/api/contact",
            get(api::list_contacts).post(api::create_contact),
        )
        // Profile
        .route(
            "/api/profile",
            get(api::get_profile).put(api::update_profile),
        )
        // Testimonials
        .route(
            "/api/testimonials",
            get(api::list_testimonials).post(api::create_testimonial),
        )
        .route(
            "/api/testimonials/{id}",
            get(api::get_testimonial).put(api::update_testimonial),
        )
        // Insights
        .route(
            "/api/insights",
            get(api::list_insights).post(api::create_insight),
        )
        .route(
            "/api/insights/{id}",
            get(api::get_insight).put(api::update_insight),
        )
        // Performance
        .route(
            "/api/performance",
            get(api::get_performance).put(api::update_performance),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(origins)),
        )
        .with_state(state)
}

/// Any origin without credentials, or an explicit list with credentials allowed.
fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                        None
                    }
                })
                .collect();

            // Wildcards are not allowed alongside credentials
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(values))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
