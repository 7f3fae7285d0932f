//! Handlers for liveness and metrics endpoints.

use axum::{Json, extract::State};

use crate::api::dto::status::{GreetingResponse, MetricsResponse};
use crate::state::AppState;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /hi`
pub async fn greeting_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "hii".to_string(),
    })
}

/// Reports request count and uptime.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response
///
/// ```json
/// { "status": "up", "totalRequests": 42, "uptime": 12.5 }
/// ```
///
/// The count includes the current request.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        status: "up".to_string(),
        total_requests: state.metrics.total_requests(),
        uptime: state.metrics.uptime().as_secs_f64(),
    })
}
