// Database models for Diesel
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::{Map, Value};
use shared_types::CalendarEvent;

use crate::store::EventDraft;

/// Database representation of calendar_events.
/// Optional columns are written as NULL on update so a save replaces the
/// whole record.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::calendar_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct EventRow {
    pub id: String,
    pub calendar_id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Unknown payload fields, always a JSON object
    pub extra: Value,
}

impl EventRow {
    pub fn from_draft(id: String, draft: EventDraft) -> Self {
        EventRow {
            id,
            calendar_id: draft.calendar_id,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            extra: Value::Object(draft.extra),
        }
    }
}

impl From<EventRow> for CalendarEvent {
    fn from(row: EventRow) -> Self {
        CalendarEvent {
            id: row.id,
            calendar_id: row.calendar_id,
            title: row.title,
            description: row.description,
            location: row.location,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            extra: match row.extra {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }
}
