//! HTTP handlers. Each one validates its path, runs the calendar guard,
//! decodes the body if it has one, then calls the matching workflow
//! operation, in that order.

use axum::{
    body::Bytes,
    extract::{Json, Path, State},
    http::StatusCode,
};
use shared_types::CalendarEvent;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::guard::ensure_calendar_exists;
use crate::params::{parse_payload, CalendarPath, EventPath};
use crate::AppState;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(path): Path<EventPath>,
) -> ApiResult<Json<CalendarEvent>> {
    let key = path.validate()?;
    ensure_calendar_exists(state.calendars.as_ref(), &key.calendar_id).await?;

    let event = state.workflow.get(&key).await?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<AppState>,
    Path(path): Path<CalendarPath>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CalendarEvent>)> {
    let calendar_id = path.validate()?;
    ensure_calendar_exists(state.calendars.as_ref(), &calendar_id).await?;
    let payload = parse_payload(&body)?;

    let event = state.workflow.create(&calendar_id, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(path): Path<EventPath>,
    body: Bytes,
) -> ApiResult<Json<CalendarEvent>> {
    let key = path.validate()?;
    ensure_calendar_exists(state.calendars.as_ref(), &key.calendar_id).await?;
    let payload = parse_payload(&body)?;

    let event = state.workflow.update(&key, payload).await?;
    Ok(Json(event))
}

pub async fn delete_event(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(path): Path<EventPath>,
) -> ApiResult<StatusCode> {
    let key = path.validate()?;
    ensure_calendar_exists(state.calendars.as_ref(), &key.calendar_id).await?;

    state.workflow.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_events(
    State(state): State<AppState>,
    Path(path): Path<CalendarPath>,
) -> ApiResult<Json<Vec<CalendarEvent>>> {
    let calendar_id = path.validate()?;
    ensure_calendar_exists(state.calendars.as_ref(), &calendar_id).await?;

    let events = state.workflow.list(&calendar_id).await?;
    Ok(Json(events))
}
