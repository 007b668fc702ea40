//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, Router};
use backend::auth::{issue_token, AuthConfig};
use backend::store::{
    CalendarDirectory, EventDraft, EventStore, InMemoryStore, StoreError, StoreResult,
};
use backend::{app, AppState};
use shared_types::CalendarEvent;

pub const TEST_EMAIL: &str = "test@example.com";

/// Event store wrapper that counts every call, optionally failing writes.
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryStore,
    pub finds: AtomicUsize,
    pub saves: AtomicUsize,
    pub removes: AtomicUsize,
    pub queries: AtomicUsize,
    fail_writes: bool,
}

impl RecordingStore {
    pub fn with_calendars(ids: &[&str]) -> Self {
        Self {
            inner: InMemoryStore::with_calendars(ids.iter().copied()),
            ..Default::default()
        }
    }

    pub fn failing_writes(ids: &[&str]) -> Self {
        Self {
            fail_writes: true,
            ..Self::with_calendars(ids)
        }
    }

    pub fn event_calls(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
            + self.saves.load(Ordering::SeqCst)
            + self.removes.load(Ordering::SeqCst)
            + self.queries.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    fn write_failure(&self) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Backend("write rejected by test store".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CalendarDirectory for RecordingStore {
    async fn exists(&self, calendar_id: &str) -> StoreResult<bool> {
        self.inner.exists(calendar_id).await
    }
}

#[async_trait]
impl EventStore for RecordingStore {
    async fn find(&self, id: &str) -> StoreResult<CalendarEvent> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find(id).await
    }

    async fn save(&self, draft: EventDraft) -> StoreResult<CalendarEvent> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.write_failure()?;
        self.inner.save(draft).await
    }

    async fn remove(&self, calendar_id: &str, id: &str) -> StoreResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.write_failure()?;
        self.inner.remove(calendar_id, id).await
    }

    async fn query(&self, calendar_id: &str) -> StoreResult<Vec<CalendarEvent>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query(calendar_id).await
    }
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        allowed_emails: vec![TEST_EMAIL.to_string()],
        token_duration_days: 1,
        cookie_name: "auth_token".to_string(),
    }
}

/// Creates a test application router over the given store.
pub fn test_app(store: Arc<RecordingStore>) -> Router {
    let state = AppState::new(store.clone(), store, test_auth_config());
    app(state)
}

pub fn bearer_token() -> String {
    let issued = issue_token(&test_auth_config(), TEST_EMAIL, None).unwrap();
    format!("Bearer {}", issued.token)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}
