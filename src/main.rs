mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router::router,
    service::{image::ImageStore, notification::LogNotifier},
    startup,
    state::AppState,
};

/// Largest accepted request body, sized for banner images.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let images = ImageStore::new(config.upload_dir.clone());
    images.ensure_dirs().await?;

    let notifier = Arc::new(LogNotifier::new(
        config.notification_email.clone(),
        config.notification_whatsapp.clone(),
    ));

    let app = router()
        .with_state(AppState::new(db, notifier, images))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(startup::cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
