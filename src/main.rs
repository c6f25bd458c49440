use tokio::signal;
use tracing::info;

use user_service::adapter::config::AppConfig;
use user_service::adapter::init::AppInitializer;
use user_service::adapter::logging::init_logging;
use user_service::adapter::web::create_router::create_router;
use user_service::error::ApplicationError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(config.log_format);

    let state = AppInitializer::initialize(&config).await?;
    let app = create_router(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.server_addr.as_str())
        .await
        .map_err(|e| {
            ApplicationError::ServerError(format!("failed to bind {}: {e}", config.server_addr))
        })?;
    info!(addr = %config.server_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApplicationError::ServerError(e.to_string()))?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
