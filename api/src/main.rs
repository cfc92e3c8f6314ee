use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use dotenv::dotenv;
use safecheck_api::{
    application::{
        http::server::http_server::{router, state},
        logger::init_logger,
    },
    args::Args,
};
use safecheck_core::infrastructure::store::JsonStore;
use tokio::{net::TcpListener, sync::broadcast::error::RecvError};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;
    spawn_store_watcher(state.service.store());

    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("SafeCheck API listening on {}", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("SafeCheck API stopped");
    Ok(())
}

fn spawn_store_watcher(store: &JsonStore) {
    let mut events = store.subscribe();

    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => debug!(key = %event.key, kind = ?event.kind, "Store updated"),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Store watcher lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
