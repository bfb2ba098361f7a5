#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use verda_store::PledgeStore;

mod config;
mod http;
mod middleware;

pub use config::ApiConfig;

pub const CRATE_NAME: &str = "verda-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PledgeStore>,
    pub api: ApiConfig,
    pub accepting_requests: Arc<AtomicBool>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PledgeStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn PledgeStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            accepting_requests: Arc::new(AtomicBool::new(true)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    pub(crate) fn next_request_id(&self) -> String {
        let seq = self.request_id_seed.fetch_add(1, Ordering::Relaxed);
        format!("req-{seq:016x}")
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::landing_handler))
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route(
            "/pledges",
            get(http::handlers::list_pledges_handler)
                .post(http::handlers::create_pledge_handler),
        )
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
