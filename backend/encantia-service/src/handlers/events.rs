/// Events page with per-event countdowns
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::handlers::signed_out_view;
use crate::middleware::MaybeUser;
use crate::models::event::EventRow;
use crate::services::countdown::{time_remaining, TimeRemaining};
use crate::services::dates::parse_timestamp;
use crate::services::navigation::{NavButton, NAV_BUTTONS};
use crate::AppState;

pub const EVENTS_PLACEHOLDER: &str = "No hay eventos disponibles.";

#[derive(Debug, Serialize, ToSchema)]
pub struct EventView {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub starts_at: Option<String>,
    /// Absent when the start time is missing or unparseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<TimeRemaining>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventsView {
    pub events: Vec<EventView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub nav: &'static [NavButton],
}

/// GET /api/v1/events
///
/// The countdown is computed per request against the current clock; a
/// catalog fetch failure is logged and renders the empty placeholder.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "pages",
    responses((status = 200, description = "Event catalog with countdowns", body = EventsView))
)]
pub async fn events(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    let rows = match state
        .supabase
        .from("events")
        .auth(&current.access_token)
        .fetch::<Vec<EventRow>>()
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "failed to load events");
            Vec::new()
        }
    };

    let now = Utc::now();
    let events: Vec<EventView> = rows
        .into_iter()
        .map(|row| EventView {
            id: row.id,
            name: row.name,
            description: row.description,
            date: row.date,
            remaining: row
                .start_time
                .as_deref()
                .and_then(parse_timestamp)
                .map(|start| time_remaining(start, now)),
            starts_at: row.start_time,
        })
        .collect();

    let placeholder = events.is_empty().then_some(EVENTS_PLACEHOLDER);
    Ok(HttpResponse::Ok().json(EventsView {
        events,
        placeholder,
        nav: NAV_BUTTONS,
    }))
}
