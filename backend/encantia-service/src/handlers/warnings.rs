/// Warnings inbox (`adv` table)
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::handlers::notes::PROFILE_ERROR;
use crate::handlers::profiles::fetch_own_profile;
use crate::handlers::signed_out_view;
use crate::middleware::MaybeUser;
use crate::models::inbox::WarningRow;
use crate::models::profile::ProfileCard;
use crate::services::navigation::{NavButton, NAV_BUTTONS};
use crate::AppState;

pub const WARNINGS_PLACEHOLDER: &str = "No tienes advertencias en este momento.";
pub const WARNINGS_ERROR: &str =
    "No se pudieron obtener las advertencias. Intenta nuevamente más tarde.";

#[derive(Debug, Serialize, ToSchema)]
pub struct WarningView {
    pub titulo: Option<String>,
    pub mensaje: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarningsView {
    pub profile: Option<ProfileCard>,
    pub warnings: Vec<WarningView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub nav: &'static [NavButton],
}

/// GET /api/v1/warnings
#[utoipa::path(
    get,
    path = "/api/v1/warnings",
    tag = "pages",
    responses((status = 200, description = "Warnings view", body = WarningsView))
)]
pub async fn warnings(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    let mut error = None;
    let profile = match fetch_own_profile(&state, &current).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load profile for warnings view");
            error = Some(PROFILE_ERROR.to_string());
            None
        }
    };

    let warnings = match state
        .supabase
        .from("adv")
        .eq("user_id", current.user.id)
        .auth(&current.access_token)
        .fetch::<Vec<WarningRow>>()
        .await
    {
        Ok(rows) => rows
            .into_iter()
            .map(|row| WarningView {
                titulo: row.titulo,
                mensaje: row.mensaje,
            })
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load warnings");
            error = Some(WARNINGS_ERROR.to_string());
            Vec::new()
        }
    };

    let placeholder = (warnings.is_empty() && error.is_none()).then_some(WARNINGS_PLACEHOLDER);
    let view = WarningsView {
        profile: profile.as_ref().map(ProfileCard::from),
        warnings,
        placeholder,
        error,
        nav: NAV_BUTTONS,
    };
    Ok(HttpResponse::Ok().json(view))
}
