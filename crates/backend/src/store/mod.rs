//! Storage collaborators for calendars and events.
//!
//! The request pipeline only sees these traits. `memory` backs tests and
//! local runs; `crate::db` provides the PostgreSQL implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use shared_types::{CalendarEvent, EventPayload};
use thiserror::Error;

pub mod memory;

pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id
    #[error("record {0} not found")]
    NotFound(String),

    /// Database connection pool error
    #[error("Database connection error")]
    ConnectionPool(#[source] diesel_async::pooled_connection::deadpool::PoolError),

    /// Database query error
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// Any other backend failure
    #[error("{0}")]
    Backend(String),
}

impl From<diesel_async::pooled_connection::deadpool::PoolError> for StoreError {
    fn from(err: diesel_async::pooled_connection::deadpool::PoolError) -> Self {
        StoreError::ConnectionPool(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// An event about to be written. `id: None` asks the store to create a new
/// record; `Some(id)` replaces the record with that id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Option<String>,
    pub calendar_id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Body fields outside the known set, stored untouched.
    pub extra: Map<String, Value>,
}

impl EventDraft {
    /// Build a draft from a request body. The body's own `id` and
    /// `calendarId` are discarded in favour of the path values.
    pub fn from_payload(payload: EventPayload, calendar_id: &str, id: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            calendar_id: calendar_id.to_string(),
            title: payload.title,
            description: payload.description,
            location: payload.location,
            starts_at: payload.starts_at,
            ends_at: payload.ends_at,
            extra: payload.extra,
        }
    }

    pub fn into_event(self, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            calendar_id: self.calendar_id,
            title: self.title,
            description: self.description,
            location: self.location,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            extra: self.extra,
        }
    }
}

/// Presence lookup over calendars.
#[async_trait]
pub trait CalendarDirectory: Send + Sync {
    async fn exists(&self, calendar_id: &str) -> StoreResult<bool>;
}

/// Persistence for calendar events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetch one event. A miss is `StoreError::NotFound`.
    async fn find(&self, id: &str) -> StoreResult<CalendarEvent>;

    /// Insert (no id) or fully replace (with id) an event.
    async fn save(&self, draft: EventDraft) -> StoreResult<CalendarEvent>;

    /// Delete one event owned by `calendar_id`. An unknown id, or an event
    /// of another calendar, is `StoreError::NotFound` and nothing is removed.
    async fn remove(&self, calendar_id: &str, id: &str) -> StoreResult<()>;

    /// All events of a calendar, in store order.
    async fn query(&self, calendar_id: &str) -> StoreResult<Vec<CalendarEvent>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_takes_ids_from_path() {
        let payload = EventPayload {
            id: Some("forged".to_string()),
            calendar_id: Some("other-cal".to_string()),
            ..EventPayload::new("standup")
        };

        let draft = EventDraft::from_payload(payload, "cal-1", None);
        assert_eq!(draft.id, None);
        assert_eq!(draft.calendar_id, "cal-1");

        let event = draft.into_event("ev-1".to_string());
        assert_eq!(event.id, "ev-1");
        assert_eq!(event.title, "standup");
    }
}
