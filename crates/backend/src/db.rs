use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection, RunQueryDsl,
};
use shared_types::CalendarEvent;
use uuid::Uuid;

use crate::models::EventRow;
use crate::store::{CalendarDirectory, EventDraft, EventStore, StoreError, StoreResult};

pub type DbPool = Pool<AsyncPgConnection>;

pub fn establish_connection_pool(database_url: &str, max_size: usize) -> anyhow::Result<DbPool> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder(config).max_size(max_size).build()?;

    Ok(pool)
}

/// PostgreSQL-backed calendar directory and event store.
///
/// Schema lives in `migrations/`; apply it with `diesel migration run`.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarDirectory for PgStore {
    async fn exists(&self, calendar_id: &str) -> StoreResult<bool> {
        use crate::schema::calendars::dsl::*;

        let mut conn = self.pool.get().await?;
        let found = diesel::select(diesel::dsl::exists(calendars.filter(id.eq(calendar_id))))
            .get_result::<bool>(&mut *conn)
            .await?;

        Ok(found)
    }
}

#[async_trait]
impl EventStore for PgStore {
    async fn find(&self, event_id: &str) -> StoreResult<CalendarEvent> {
        use crate::schema::calendar_events::dsl::*;

        let mut conn = self.pool.get().await?;
        let row = calendar_events
            .filter(id.eq(event_id))
            .select(EventRow::as_select())
            .first(&mut *conn)
            .await
            .optional()?;

        row.map(Into::into)
            .ok_or_else(|| StoreError::NotFound(event_id.to_string()))
    }

    async fn save(&self, draft: EventDraft) -> StoreResult<CalendarEvent> {
        use crate::schema::calendar_events::dsl::*;

        let event_id = draft
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let row = EventRow::from_draft(event_id, draft);

        let mut conn = self.pool.get().await?;
        let saved = diesel::insert_into(calendar_events)
            .values(&row)
            .on_conflict(id)
            .do_update()
            .set(&row)
            .returning(EventRow::as_returning())
            .get_result(&mut *conn)
            .await?;

        Ok(saved.into())
    }

    async fn remove(&self, calendar: &str, event_id: &str) -> StoreResult<()> {
        use crate::schema::calendar_events::dsl::*;

        let mut conn = self.pool.get().await?;
        let deleted = diesel::delete(
            calendar_events
                .filter(id.eq(event_id))
                .filter(calendar_id.eq(calendar)),
        )
        .execute(&mut *conn)
        .await?;

        if deleted == 0 {
            return Err(StoreError::NotFound(event_id.to_string()));
        }
        Ok(())
    }

    async fn query(&self, calendar: &str) -> StoreResult<Vec<CalendarEvent>> {
        use crate::schema::calendar_events::dsl::*;

        let mut conn = self.pool.get().await?;
        let rows = calendar_events
            .filter(calendar_id.eq(calendar))
            // ASC puts NULL start times last in Postgres
            .order((starts_at.asc(), id.asc()))
            .select(EventRow::as_select())
            .load(&mut *conn)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
