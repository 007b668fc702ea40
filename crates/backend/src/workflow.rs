//! Event operations against the store, with outcome translation.
//!
//! Only the `get` lookup and the `update` lookup rewrite a store miss into a
//! domain `NotFound`. Every other store failure is returned unchanged.

use std::sync::Arc;

use shared_types::{CalendarEvent, EventPayload};

use crate::error::{ApiError, ApiResult};
use crate::params::EventKey;
use crate::store::{EventDraft, EventStore, StoreError};

pub const EVENT_NOT_FOUND: &str = "Event not found";
/// Kept verbatim for existing clients even though the failed lookup is by
/// event id.
pub const UPDATE_TARGET_NOT_FOUND: &str = "Calendar id not found";

#[derive(Clone)]
pub struct EventWorkflow {
    events: Arc<dyn EventStore>,
}

impl EventWorkflow {
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }

    pub async fn get(&self, key: &EventKey) -> ApiResult<CalendarEvent> {
        match self.events.find(&key.event_id).await {
            Ok(event) if event.calendar_id == key.calendar_id => Ok(event),
            Ok(_) => {
                tracing::debug!(
                    event_id = %key.event_id,
                    calendar_id = %key.calendar_id,
                    "event belongs to another calendar"
                );
                Err(ApiError::not_found(EVENT_NOT_FOUND))
            }
            Err(StoreError::NotFound(_)) => Err(ApiError::not_found(EVENT_NOT_FOUND)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn create(
        &self,
        calendar_id: &str,
        payload: EventPayload,
    ) -> ApiResult<CalendarEvent> {
        let draft = EventDraft::from_payload(payload, calendar_id, None);
        let event = self.events.save(draft).await?;

        tracing::info!(event_id = %event.id, calendar_id, "event created");
        Ok(event)
    }

    /// Replaces the whole event after confirming it exists under this
    /// calendar. The save is never issued when the lookup fails.
    pub async fn update(&self, key: &EventKey, payload: EventPayload) -> ApiResult<CalendarEvent> {
        match self.events.find(&key.event_id).await {
            Ok(existing) if existing.calendar_id == key.calendar_id => {}
            Ok(_) => {
                tracing::debug!(
                    event_id = %key.event_id,
                    calendar_id = %key.calendar_id,
                    "refusing cross-calendar update"
                );
                return Err(ApiError::not_found(UPDATE_TARGET_NOT_FOUND));
            }
            Err(StoreError::NotFound(_)) => {
                return Err(ApiError::not_found(UPDATE_TARGET_NOT_FOUND))
            }
            Err(e) => return Err(e.into()),
        }

        let draft = EventDraft::from_payload(payload, &key.calendar_id, Some(&key.event_id));
        Ok(self.events.save(draft).await?)
    }

    /// Removes the event only if it belongs to this calendar; any miss is
    /// the store's own `NotFound`.
    pub async fn delete(&self, key: &EventKey) -> ApiResult<()> {
        self.events.remove(&key.calendar_id, &key.event_id).await?;

        tracing::info!(event_id = %key.event_id, calendar_id = %key.calendar_id, "event removed");
        Ok(())
    }

    pub async fn list(&self, calendar_id: &str) -> ApiResult<Vec<CalendarEvent>> {
        Ok(self.events.query(calendar_id).await?)
    }
}
