use axum::{
    routing::get,
    Router,
};

use crate::handlers;
use crate::AppState;

/// Route table for calendar-scoped events.
///
/// Collection routes accept both `/events/` and `/events`.
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Collection
        .route(
            "/:calendar_id/events/",
            get(handlers::list_events).put(handlers::create_event),
        )
        .route(
            "/:calendar_id/events",
            get(handlers::list_events).put(handlers::create_event),
        )
        // Item
        .route(
            "/:calendar_id/events/:id",
            get(handlers::get_event)
                .post(handlers::update_event)
                .delete(handlers::delete_event),
        )
}

