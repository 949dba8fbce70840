//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, warn};

use super::responses::{ErrorResponse, HealthResponse, NavResponse, StatusResponse};
use crate::{
    scroll::{ScrollInput, ScrollState},
    state::{AppState, CountdownView},
};

/// Handle GET /countdown - Latest countdown evaluation
pub async fn countdown_handler(State(state): State<Arc<AppState>>) -> Json<CountdownView> {
    Json(state.countdown_view())
}

/// Handle POST /scroll - Scroll state for one sample from the page
pub async fn scroll_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ScrollInput>,
) -> Result<Json<ScrollState>, (StatusCode, Json<ErrorResponse>)> {
    if !input.is_finite() {
        warn!("Rejecting scroll sample with non-finite values");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("scroll sample contains non-finite values")),
        ));
    }

    let scroll_state = state.tracker.compute(&input);
    debug!(
        "Scroll y={} -> active={:?} progress={:.3} overlay={}",
        input.scroll_y,
        scroll_state.active_section_id,
        scroll_state.progress_fraction,
        scroll_state.overlay_visible
    );
    Ok(Json(scroll_state))
}

/// Handle GET /nav - Navigation links
pub async fn nav_handler(State(state): State<Arc<AppState>>) -> Json<NavResponse> {
    Json(NavResponse {
        links: state.tracker.links().to_vec(),
        probe_offset: state.tracker.settings().probe_offset,
    })
}

/// Handle GET /status - Return current server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        countdown_available: state.countdown.is_some(),
        event_start: state.countdown.map(|c| c.start),
        event_end: state.countdown.map(|c| c.end),
        tick_interval_ms: state.tick_interval.as_millis() as u64,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
