//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use catalog_common::{AppConfig, AppError, SessionTokenService};
use catalog_core::traits::Mailer;
use catalog_core::OtpPolicy;
use catalog_db::{create_pool, run_migrations, DatabaseConfig};
use catalog_service::{HttpMailer, LocalObjectStore, LogMailer, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health checks skip the rate limiter so orchestration checks never get 429.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = create_router(&state, config.storage.max_file_size_bytes());
    let api = apply_middleware_with_config(
        api,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(health.merge(api).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
    info!("Database migrations applied");

    let mailer: Arc<dyn Mailer> = match &config.mail.api_key {
        Some(key) => Arc::new(HttpMailer::new(
            config.mail.api_url.clone(),
            key.clone(),
            config.mail.from.clone(),
        )?),
        None => {
            warn!("MAIL_API_KEY not set, one-time passcodes are written to the log");
            Arc::new(LogMailer)
        }
    };

    let object_store = Arc::new(LocalObjectStore::new(
        config.storage.upload_dir.clone(),
        config.storage.public_base_url.clone(),
    ));

    let session_tokens = Arc::new(SessionTokenService::new(
        &config.jwt.secret,
        config.jwt.session_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .with_postgres(pool)
        .mailer(mailer)
        .object_store(object_store)
        .session_tokens(session_tokens)
        .otp_policy(OtpPolicy::new(
            config.otp.max_per_hour,
            config.otp.validity_secs,
        ))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
