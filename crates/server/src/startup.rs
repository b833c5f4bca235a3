use std::net::SocketAddr;

use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the shared state, honoring the seed flag.
pub fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let state = if cfg.store.seed { AppState::seeded()? } else { AppState::new() };
    info!(seeded = cfg.store.seed, records = state.snowparks.len(), "snowpark store ready");
    Ok(state)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = routes::build_router(state, build_cors());
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app from config and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg)?;

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "starting server");

    serve(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, draining connections"),
        Err(e) => {
            // without a handler the server runs until the process is killed
            error!(event = "signal_handler_failed", error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
