mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::prepare_image_dir(&config).await?;
    let cors = startup::build_cors_layer(&config)?;

    let state = AppState::new(db, config.image_dir.clone(), config.app_url.clone());
    let app = router::router(state).layer(cors);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        "Starting server on {}, Swagger UI at {}/swagger-ui",
        config.bind_address,
        config.app_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
