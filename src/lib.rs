//! ScamShield URL Classification Service
//!
//! A small HTTP service that labels URLs as "Scam" or "Safe" with a
//! bag-of-words logistic-regression classifier trained in memory at startup
//! from two labeled CSV datasets.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       SCAMSHIELD                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌─────────────────┐  │
//! │  │  Data     │──▶│  Classifier  │──▶│  HTTP API       │  │
//! │  │  Loader   │   │  Pipeline    │   │  (Axum)         │  │
//! │  │  (CSV)    │   │  (fit once)  │   │  POST /predict  │  │
//! │  └───────────┘   └──────────────┘   └─────────────────┘  │
//! │        startup ──────────▶ frozen ─────▶ per request     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use classifier::Pipeline;
use config::Config;

pub use error::{AppError, AppResult};

/// Shared application state: the fitted pipeline is read-only for the process
/// lifetime, so handlers share it through an `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub config: Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::page))
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
