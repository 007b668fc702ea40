//! Parent-calendar existence check run ahead of every event operation.

use crate::error::{ApiError, ApiResult};
use crate::store::CalendarDirectory;

pub const CALENDAR_NOT_FOUND: &str = "Calendar not found";

/// Fails with `NotFound` when the calendar is absent. Directory failures
/// propagate as storage errors.
pub async fn ensure_calendar_exists(
    directory: &dyn CalendarDirectory,
    calendar_id: &str,
) -> ApiResult<()> {
    if directory.exists(calendar_id).await? {
        return Ok(());
    }

    tracing::debug!(calendar_id, "calendar missing, rejecting request");
    Err(ApiError::not_found(CALENDAR_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[tokio::test]
    async fn test_existing_calendar_passes() {
        let store = InMemoryStore::with_calendars(["cal-1"]);
        assert!(ensure_calendar_exists(&store, "cal-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_calendar_is_not_found() {
        let store = InMemoryStore::new();
        let err = ensure_calendar_exists(&store, "cal-1").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(msg) if msg == CALENDAR_NOT_FOUND));
    }
}
