/// Message inbox (`buzdvz` table)
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::handlers::notes::PROFILE_ERROR;
use crate::handlers::profiles::fetch_own_profile;
use crate::handlers::signed_out_view;
use crate::middleware::MaybeUser;
use crate::models::inbox::InboxMessageRow;
use crate::models::profile::ProfileCard;
use crate::services::dates::format_timestamp;
use crate::services::navigation::{NavButton, NAV_BUTTONS};
use crate::AppState;

pub const INBOX_PLACEHOLDER: &str = "No tienes mensajes en este momento.";
pub const INBOX_ERROR: &str =
    "No se pudieron obtener los mensajes. Intenta nuevamente más tarde.";

#[derive(Debug, Serialize, ToSchema)]
pub struct InboxMessageView {
    pub title: Option<String>,
    pub mensaje: Option<String>,
    /// Formatted as `dd/mm/yyyy hh:mm`, or "Fecha inválida".
    pub received_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InboxView {
    pub profile: Option<ProfileCard>,
    pub messages: Vec<InboxMessageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub nav: &'static [NavButton],
}

/// GET /api/v1/inbox
#[utoipa::path(
    get,
    path = "/api/v1/inbox",
    tag = "pages",
    responses((status = 200, description = "Inbox view", body = InboxView))
)]
pub async fn inbox(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    let mut error = None;
    let profile = match fetch_own_profile(&state, &current).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load profile for inbox view");
            error = Some(PROFILE_ERROR.to_string());
            None
        }
    };

    let messages = match state
        .supabase
        .from("buzdvz")
        .eq("user_id", current.user.id)
        .auth(&current.access_token)
        .fetch::<Vec<InboxMessageRow>>()
        .await
    {
        Ok(rows) => rows
            .into_iter()
            .map(|row| InboxMessageView {
                received_at: format_timestamp(row.created_at.as_deref()),
                title: row.title,
                mensaje: row.mensaje,
            })
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load inbox messages");
            error = Some(INBOX_ERROR.to_string());
            Vec::new()
        }
    };

    let placeholder = (messages.is_empty() && error.is_none()).then_some(INBOX_PLACEHOLDER);
    let view = InboxView {
        profile: profile.as_ref().map(ProfileCard::from),
        messages,
        placeholder,
        error,
        nav: NAV_BUTTONS,
    };
    Ok(HttpResponse::Ok().json(view))
}
