use std::time::Duration;

use actix_web::{HttpResponse, Responder, get};
use chrono::Utc;
use humantime::format_duration;

use crate::constants::START_TIME;

#[get("/health")]
pub async fn health_check() -> impl Responder {
    let now = Utc::now();
    let uptime_secs = now
        .signed_duration_since(*START_TIME)
        .num_seconds()
        .max(0) as u64;

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "uptime": format_duration(Duration::from_secs(uptime_secs)).to_string(),
        "started_at": START_TIME.to_rfc3339(),
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
