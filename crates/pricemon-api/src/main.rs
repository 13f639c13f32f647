//! Commodity price monitor API.
//!
//! Usage: `pricemon-api [CONFIG_PATH]` (default `pricemon.yaml`).
//! Env: `DISABLE_BACKGROUND_JOBS`, `PRICEMON_LISTEN`, `API_BASE_URL`, `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricemon_api::{app_state::AppState, config, jobs, router};
use pricemon_core::error::{PriceMonError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args().nth(1);
    let cfg = config::load(path.as_deref(), |k| std::env::var(k).ok())?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    let scheduler = jobs::Scheduler::start(
        state.jobs_enabled(),
        jobs::default_jobs(&state),
        state.clone(),
    );
    let app = router::build_router(state.clone());

    tracing::info!(%listen, jobs = scheduler.job_count(), "pricemon-api starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PriceMonError::Internal(format!("failed to bind {listen}: {e}")))?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| PriceMonError::Internal(format!("server failed: {e}")));

    scheduler.shutdown().await;
    served
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
