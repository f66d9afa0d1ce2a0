use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::{dto::HealthDto, state::AppState};

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
