//! DTOs for the liveness and metrics endpoints.

use serde::Serialize;

/// Fixed payload returned by the liveness probe.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Service status with request counter and uptime.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub status: String,
    pub total_requests: u64,
    /// Seconds since startup.
    pub uptime: f64,
}
