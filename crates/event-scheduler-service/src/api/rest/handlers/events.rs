//! Event admission and listing handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use event_scheduler_core::{Admission, Interval, Rejection};
use serde::{Deserialize, Serialize};

pub const EVENT_ADDED: &str = "Event added successfully";
pub const EVENT_OVERLAPS: &str = "Event overlaps with an existing event";
pub const INVALID_BODY: &str = "Invalid request body";
pub const INVALID_RANGE: &str = "Invalid time range";

/// Wire shape of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBody {
    pub start_time: i64,
    pub end_time: i64,
}

impl From<EventBody> for Interval {
    fn from(body: EventBody) -> Self {
        Interval::new(body.start_time, body.end_time)
    }
}

impl From<Interval> for EventBody {
    fn from(interval: Interval) -> Self {
        Self {
            start_time: interval.start,
            end_time: interval.end,
        }
    }
}

/// List admitted events in ascending start order
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<EventBody>> {
    let events = state
        .scheduler
        .list()
        .into_iter()
        .map(EventBody::from)
        .collect();
    Json(events)
}

/// Admit a new event.
///
/// The body is decoded regardless of its declared content type.
pub async fn create_event(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, &'static str)> {
    let event: EventBody = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Undecodable event body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    })?;

    match state.scheduler.admit(event.into()) {
        Admission::Accepted => Ok((StatusCode::CREATED, EVENT_ADDED)),
        Admission::Rejected(Rejection::Overlap { .. }) => {
            Err(ApiError::Conflict(EVENT_OVERLAPS.to_string()))
        }
        Admission::Rejected(_) => Err(ApiError::BadRequest(INVALID_RANGE.to_string())),
    }
}

/// CORS pre-flight handshake
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
