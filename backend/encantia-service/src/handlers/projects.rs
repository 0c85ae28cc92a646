/// Project board: public listing plus Owner+ management
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::handlers::profiles::fetch_own_profile;
use crate::handlers::signed_out_view;
use crate::middleware::{CurrentUser, MaybeUser};
use crate::models::profile::{Profile, DEFAULT_AVATAR_URL};
use crate::models::project::{NewProjectRow, ProjectRow};
use crate::services::dates::format_timestamp;
use crate::services::navigation::{NavButton, NAV_BUTTONS};
use crate::AppState;

pub const PROJECTS_PLACEHOLDER: &str = "No hay proyectos disponibles.";
pub const UNKNOWN_AUTHOR: &str = "Autor desconocido";

/// Forbidden message for non-Owner+ management calls.
pub const PROJECTS_FORBIDDEN: &str = "No tienes permisos para crear proyectos. \
     Solo los usuarios con rol Owner+ pueden acceder a esta funcionalidad.";

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectView {
    pub id: i64,
    pub titulo: Option<String>,
    pub mensaje: Option<String>,
    pub portada: Option<String>,
    pub autor: String,
    pub fotoperfil: String,
    /// Formatted as `dd/mm/yyyy hh:mm`, or "Fecha inválida".
    pub inicio: String,
    pub fin: String,
}

impl From<ProjectRow> for ProjectView {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            inicio: format_timestamp(row.iniciopr.as_deref()),
            fin: format_timestamp(row.findepr.as_deref()),
            titulo: row.titulo,
            mensaje: row.mensaje,
            portada: row.portada,
            autor: row
                .autor
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            fotoperfil: match row.fotoperfil {
                Some(url) if !url.is_empty() => url,
                _ => DEFAULT_AVATAR_URL.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectsView {
    pub projects: Vec<ProjectView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub can_manage: bool,
    pub nav: &'static [NavButton],
}

async fn fetch_projects(state: &AppState, token: &str) -> Vec<ProjectRow> {
    match state
        .supabase
        .from("proyectos")
        .auth(token)
        .fetch::<Vec<ProjectRow>>()
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "failed to load projects");
            Vec::new()
        }
    }
}

fn projects_view(rows: Vec<ProjectRow>, can_manage: bool) -> ProjectsView {
    let projects: Vec<ProjectView> = rows.into_iter().map(ProjectView::from).collect();
    let placeholder = projects.is_empty().then_some(PROJECTS_PLACEHOLDER);
    ProjectsView {
        projects,
        placeholder,
        can_manage,
        nav: NAV_BUTTONS,
    }
}

/// Role gate for project management. The caller's stored profile decides,
/// never anything carried in the request.
async fn require_owner_plus(state: &AppState, current: &CurrentUser) -> Result<Profile> {
    let profile = fetch_own_profile(state, current).await?;
    match profile {
        Some(profile) if profile.is_owner_plus() => Ok(profile),
        _ => Err(AppError::Forbidden(PROJECTS_FORBIDDEN.to_string())),
    }
}

/// GET /api/v1/projects
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "projects",
    responses((status = 200, description = "Project board", body = ProjectsView))
)]
pub async fn list(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    let can_manage = fetch_own_profile(&state, &current)
        .await
        .ok()
        .flatten()
        .is_some_and(|p| p.is_owner_plus());

    let rows = fetch_projects(&state, &current.access_token).await;
    Ok(HttpResponse::Ok().json(projects_view(rows, can_manage)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "Todos los campos del proyecto son obligatorios."))]
    pub titulo: String,
    #[validate(length(min = 1, message = "Todos los campos del proyecto son obligatorios."))]
    pub mensaje: String,
    #[validate(length(min = 1, message = "Todos los campos del proyecto son obligatorios."))]
    pub portada: String,
    #[validate(length(min = 1, message = "Todos los campos del proyecto son obligatorios."))]
    pub iniciopr: String,
    #[validate(length(min = 1, message = "Todos los campos del proyecto son obligatorios."))]
    pub findepr: String,
}

/// POST /api/v1/projects
///
/// Creates the project with an author snapshot from the caller's profile
/// and answers with the refreshed board.
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created; refreshed board", body = ProjectsView),
        (status = 401, description = "No session"),
        (status = 403, description = "Caller role is not Owner+")
    )
)]
pub async fn create(
    state: web::Data<AppState>,
    current: CurrentUser,
    payload: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;
    let profile = require_owner_plus(&state, &current).await?;

    let now = Utc::now().to_rfc3339();
    let payload = payload.into_inner();
    let row = NewProjectRow {
        titulo: payload.titulo,
        mensaje: payload.mensaje,
        portada: payload.portada,
        iniciopr: payload.iniciopr,
        findepr: payload.findepr,
        created_at: now.clone(),
        updated_at: now,
        user_id: Some(current.user.id),
        fotoperfil: profile.avatar_or_default(),
        autor: profile
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
    };

    state
        .supabase
        .from("proyectos")
        .auth(&current.access_token)
        .insert(&[row])
        .await?;

    tracing::info!(user_id = %current.user.id, "project created");

    let rows = fetch_projects(&state, &current.access_token).await;
    Ok(HttpResponse::Created().json(projects_view(rows, true)))
}

/// DELETE /api/v1/projects/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    responses(
        (status = 200, description = "Project removed; refreshed board", body = ProjectsView),
        (status = 401, description = "No session"),
        (status = 403, description = "Caller role is not Owner+")
    )
)]
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    current: CurrentUser,
) -> Result<HttpResponse> {
    require_owner_plus(&state, &current).await?;
    let id = path.into_inner();

    state
        .supabase
        .from("proyectos")
        .eq("id", id)
        .auth(&current.access_token)
        .delete()
        .await?;

    tracing::info!(user_id = %current.user.id, project_id = id, "project deleted");

    let rows = fetch_projects(&state, &current.access_token).await;
    Ok(HttpResponse::Ok().json(projects_view(rows, true)))
}
