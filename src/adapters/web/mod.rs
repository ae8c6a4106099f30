//! Web server adapter.
//!
//! Axum server with an HTMX front end: every change to a control re-requests
//! the dashboard panel, which is recomputed from scratch.

mod error;
mod handlers;
mod templates;

pub use error::WebError;
pub use handlers::*;
pub use templates::*;

use std::path::PathBuf;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::adapters::SharedDataPort;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

pub struct AppState {
    pub data_port: SharedDataPort,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(data_port: SharedDataPort, config: &dyn ConfigPort) -> Self {
        Self {
            data_port,
            static_dir: PathBuf::from(config.get_string_or("web", "static_dir", "static")),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    Router::new()
        .route("/", get(handlers::dashboard))
        .nest_service("/static", static_files)
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(std::sync::Arc::new(state))
}

fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}
