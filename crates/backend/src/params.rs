//! Request input parsing.
//!
//! Path parameters are checked before any store access. The body is kept
//! as raw bytes by the handlers and decoded with `parse_payload` only after
//! the calendar guard has passed, so a missing calendar wins over a bad body.

use axum::body::Bytes;
use serde::Deserialize;
use shared_types::EventPayload;

use crate::error::{ApiError, ApiResult};

/// Path parameters of `/:calendar_id/events/`.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarPath {
    #[serde(default)]
    pub calendar_id: String,
}

/// Path parameters of `/:calendar_id/events/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct EventPath {
    #[serde(default)]
    pub calendar_id: String,
    #[serde(default)]
    pub id: String,
}

/// Path parameters of an item route after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventKey {
    pub calendar_id: String,
    pub event_id: String,
}

impl CalendarPath {
    pub fn validate(self) -> ApiResult<String> {
        required("calendarId", self.calendar_id)
    }
}

impl EventPath {
    pub fn validate(self) -> ApiResult<EventKey> {
        Ok(EventKey {
            calendar_id: required("calendarId", self.calendar_id)?,
            event_id: required("id", self.id)?,
        })
    }
}

fn required(field: &str, value: String) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::missing_field(field));
    }
    Ok(trimmed.to_string())
}

/// Decode an event body. Event content is opaque, so the only failure is
/// a body that is not a JSON object of the expected shape.
pub fn parse_payload(body: &Bytes) -> ApiResult<EventPayload> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(format!("Invalid JSON body: {}", e)))
}
