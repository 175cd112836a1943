pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::usecases::u508_nl_query::{HttpTranslator, QueryExecutor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let static_dir = shared::config::resolve_static_dir(&config);

    tracing::info!("Forwarding questions to {}", config.upstream.url);
    tracing::info!("Serving frontend from {}", static_dir.display());

    let translator = Arc::new(HttpTranslator::new(config.upstream.url.clone()));
    let executor = Arc::new(QueryExecutor::new(translator, config.pagination.page_size));
    let app = routes::configure_routes(executor, &static_dir);

    let addr = config.server.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", addr.port());
            } else {
                tracing::error!("Failed to bind to {}: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
