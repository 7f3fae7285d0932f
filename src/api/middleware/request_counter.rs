//! Request counting middleware feeding [`RequestMetrics`].

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::infrastructure::request_metrics::RequestMetrics;

/// Counts every request before it reaches a handler.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/metrics", get(metrics_handler))
///     .layer(middleware::from_fn_with_state(metrics, request_counter::layer));
/// ```
pub async fn layer(
    State(metrics): State<Arc<RequestMetrics>>,
    req: Request,
    next: Next,
) -> Response {
    metrics.record_request();
    next.run(req).await
}
