//! HTTP routes for the delivery proxy server

pub mod health;
pub mod proxy;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router with tracing and wide-open CORS.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::router())
        .merge(proxy::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
