//! In-memory store used for local runs and tests.

use std::collections::HashSet;

use async_trait::async_trait;
use shared_types::CalendarEvent;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CalendarDirectory, EventDraft, EventStore, StoreError, StoreResult};

/// Keeps calendars in a set and events in insertion order, which is the
/// order `query` returns them in.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    calendars: RwLock<HashSet<String>>,
    events: RwLock<Vec<CalendarEvent>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calendars<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            calendars: RwLock::new(ids.into_iter().map(Into::into).collect()),
            events: RwLock::default(),
        }
    }

    pub async fn add_calendar(&self, calendar_id: impl Into<String>) {
        self.calendars.write().await.insert(calendar_id.into());
    }
}

#[async_trait]
impl CalendarDirectory for InMemoryStore {
    async fn exists(&self, calendar_id: &str) -> StoreResult<bool> {
        Ok(self.calendars.read().await.contains(calendar_id))
    }
}

#[async_trait]
impl EventStore for InMemoryStore {
    async fn find(&self, id: &str) -> StoreResult<CalendarEvent> {
        self.events
            .read()
            .await
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn save(&self, draft: EventDraft) -> StoreResult<CalendarEvent> {
        let mut events = self.events.write().await;

        match draft.id.clone() {
            Some(id) => {
                let event = draft.into_event(id);
                match events.iter_mut().find(|existing| existing.id == event.id) {
                    Some(existing) => *existing = event.clone(),
                    None => events.push(event.clone()),
                }
                Ok(event)
            }
            None => {
                let event = draft.into_event(Uuid::new_v4().to_string());
                events.push(event.clone());
                Ok(event)
            }
        }
    }

    async fn remove(&self, calendar_id: &str, id: &str) -> StoreResult<()> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|event| !(event.id == id && event.calendar_id == calendar_id));

        if events.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn query(&self, calendar_id: &str) -> StoreResult<Vec<CalendarEvent>> {
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.calendar_id == calendar_id)
            .cloned()
            .collect())
    }
}
