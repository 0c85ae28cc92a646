/// Notes page: the caller's evaluation record
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::handlers::profiles::fetch_own_profile;
use crate::handlers::signed_out_view;
use crate::middleware::MaybeUser;
use crate::models::evaluation::{EvaluationEntry, EvaluationRow};
use crate::models::profile::ProfileCard;
use crate::services::navigation::{NavButton, NAV_BUTTONS};
use crate::AppState;

pub const NOTES_PLACEHOLDER: &str = "No hay notas disponibles.";
pub const PROFILE_ERROR: &str = "No se pudo obtener el perfil.";

const EVALUATION_COLUMNS: &str =
    "evau1, evau2, evau3, evau4, evau5, evau6, evau7, evau8, nm, urod, evaucat, mensaje";

#[derive(Debug, Serialize, ToSchema)]
pub struct EvaluationView {
    pub entries: Vec<EvaluationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners_message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotesView {
    pub profile: Option<ProfileCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<EvaluationView>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub nav: &'static [NavButton],
}

/// GET /api/v1/notes
///
/// The evaluation query error (if any) is surfaced verbatim inside the
/// view; the page itself still answers 200.
#[utoipa::path(
    get,
    path = "/api/v1/notes",
    tag = "pages",
    responses((status = 200, description = "Evaluation record view", body = NotesView))
)]
pub async fn notes(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    let mut error = None;
    let profile = match fetch_own_profile(&state, &current).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load profile for notes view");
            error = Some(PROFILE_ERROR.to_string());
            None
        }
    };

    let rows = match state
        .supabase
        .from("ntas")
        .select(EVALUATION_COLUMNS)
        .eq("user_id", current.user.id)
        .auth(&current.access_token)
        .fetch::<Vec<EvaluationRow>>()
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            error = Some(e.to_string());
            Vec::new()
        }
    };

    let categories = rows
        .iter()
        .filter_map(|r| r.evaucat.clone())
        .fold(Vec::new(), |mut acc: Vec<String>, cat| {
            if !acc.contains(&cat) {
                acc.push(cat);
            }
            acc
        });

    let record = rows.first().map(|row| EvaluationView {
        entries: row.entries(),
        category: row.evaucat.clone(),
        owners_message: row.mensaje.clone(),
    });

    let placeholder = (record.is_none() && error.is_none()).then_some(NOTES_PLACEHOLDER);
    let view = NotesView {
        profile: profile.as_ref().map(ProfileCard::from),
        record,
        categories,
        placeholder,
        error,
        nav: NAV_BUTTONS,
    };
    Ok(HttpResponse::Ok().json(view))
}
