use std::net::SocketAddr;

use api::application::{quote_service::QuoteServiceImpl, todo_service::TodoServiceImpl};
use api::config::Config;
use api::http::routing;
use api::infrastructure::mongo_repo::MongoStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().inspect_err(|e| tracing::error!(error = %e, "configuration error"))?;
    tracing::info!(
        port = config.port,
        static_dir = %config.static_dir.display(),
        allowed_origins = config.allowed_origins.len(),
        "configuration loaded"
    );

    tracing::info!("connecting to MongoDB");
    let store = MongoStore::connect(&config.mongodb_uri, &config.database)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "could not connect to MongoDB"))?;
    tracing::info!(database = store.database_name(), "connected to MongoDB");

    let api = routing::api(QuoteServiceImpl::new(store.quotes()), TodoServiceImpl::new(store.todos()));
    let router = routing::app(api, &config.allowed_origins, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => {
                tracing::warn!(error = %e, "could not install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c() => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown");
}
