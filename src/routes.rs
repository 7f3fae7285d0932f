//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /hi`          - Liveness probe
//! - `GET    /all`         - Snapshot of every stored link
//! - `GET    /metrics`     - Request count and uptime
//! - `POST   /encode-url`  - Create a short link
//! - `GET    /{code}`      - Short link redirect (302)
//! - `DELETE /{code}`      - Delete a short link
//!
//! Static paths take precedence over `/{code}`.
//!
//! # Middleware
//!
//! From outermost to innermost:
//!
//! - **Request id** - Assigns `X-Request-Id` when absent
//! - **Tracing** - Structured request/response logging
//! - **Request id propagation** - Echoes `X-Request-Id` on the response
//! - **Request counter** - Feeds `GET /metrics`

use crate::api::handlers::{
    delete_link_handler, encode_handler, greeting_handler, list_links_handler, metrics_handler,
    redirect_handler,
};
use crate::api::middleware::{request_counter, request_id, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let observability = ServiceBuilder::new()
        .layer(request_id::set_layer())
        .layer(tracing::layer())
        .layer(request_id::propagate_layer());

    Router::new()
        .route("/hi", get(greeting_handler))
        .route("/all", get(list_links_handler))
        .route("/metrics", get(metrics_handler))
        .route("/encode-url", post(encode_handler))
        .route("/{code}", get(redirect_handler).delete(delete_link_handler))
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            request_counter::layer,
        ))
        .layer(observability)
        .with_state(state)
}
