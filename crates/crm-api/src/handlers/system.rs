//! Liveness endpoints kept from the storefront server

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct DemoResponse {
    pub message: &'static str,
    pub timestamp: String,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET /api/ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        timestamp: timestamp(),
    })
}

/// GET /api/demo
pub async fn demo() -> Json<DemoResponse> {
    Json(DemoResponse {
        message: "Hello from the demo API endpoint!",
        timestamp: timestamp(),
    })
}
