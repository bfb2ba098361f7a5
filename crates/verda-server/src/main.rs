#![forbid(unsafe_code)]

use std::env;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verda_server::{build_router, ApiConfig, AppState};
use verda_store::{FileStore, MemoryStore, PledgeStore};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("VERDA_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("VERDA_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let api_cfg = ApiConfig {
        max_body_bytes: env_usize("VERDA_MAX_BODY_BYTES", 16 * 1024),
        shutdown_drain: env_duration_ms("VERDA_SHUTDOWN_DRAIN_MS", 5000),
    };

    let store: Arc<dyn PledgeStore> = match env::var("VERDA_DATA_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            info!(path = %path, "using flat-file pledge store");
            Arc::new(FileStore::open(path).map_err(|e| format!("open pledge file: {e}"))?)
        }
        _ => {
            info!("using volatile in-memory pledge store");
            Arc::new(MemoryStore::new())
        }
    };
    if let Err(e) = store.probe().await {
        error!("store probe failed at startup: {e}");
    }

    let state = AppState::with_config(store, api_cfg.clone());
    let app = build_router(state.clone());

    let addr: std::net::SocketAddr = bind_addr
        .parse()
        .map_err(|e| format!("invalid bind addr {bind_addr}: {e}"))?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind failed: {e}"))?;
    info!("verda-server listening on {bind_addr}");

    let accepting = state.accepting_requests.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            accepting.store(false, Ordering::Relaxed);
            tokio::time::sleep(api_cfg.shutdown_drain).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
