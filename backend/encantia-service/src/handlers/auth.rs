/// Sign-in, sign-out and session introspection
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::handlers::profiles::fetch_own_profile;
use crate::middleware::{CurrentUser, MaybeUser};
use crate::models::profile::{ProfileCard, UserRole};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionView {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileCard>,
    pub profile_complete: bool,
}

/// POST /api/v1/auth/login
///
/// A rejected sign-in surfaces the remote error text verbatim; nothing
/// is rephrased locally.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Rejected by the auth service; message is verbatim")
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation(
            "El correo electrónico y la contraseña son obligatorios.".to_string(),
        ));
    }

    let session = state
        .supabase
        .sign_in_with_password(payload.email.trim(), &payload.password)
        .await?;

    tracing::info!(user_id = %session.user.id, "user signed in");

    Ok(HttpResponse::Ok().json(LoginResponse {
        user_id: session.user.id,
        email: session.user.email.clone(),
        access_token: session.access_token,
        refresh_token: session.refresh_token,
        expires_in: session.expires_in,
    }))
}

/// POST /api/v1/auth/logout
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session invalidated"),
        (status = 401, description = "No usable session")
    )
)]
pub async fn logout(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    state.supabase.sign_out(&current.access_token).await?;
    tracing::info!(user_id = %current.user.id, "user signed out");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Sesión cerrada correctamente." })))
}

/// GET /api/v1/auth/session
///
/// Identity, role and profile completeness in one call. Profile and role
/// lookups are tolerant: a failure leaves the field empty rather than
/// failing the whole view.
#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    tag = "auth",
    responses((status = 200, description = "Current session state", body = SessionView))
)]
pub async fn session(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(SessionView {
            signed_in: false,
            user_id: None,
            email: None,
            role: None,
            profile: None,
            profile_complete: false,
        }));
    };

    let profile = fetch_own_profile(&state, &current).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load profile for session view");
        None
    });

    let role = state
        .supabase
        .from("user_roles")
        .select("role")
        .eq("user_id", current.user.id)
        .auth(&current.access_token)
        .fetch_optional::<UserRole>()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load user role for session view");
            None
        });

    Ok(HttpResponse::Ok().json(SessionView {
        signed_in: true,
        user_id: Some(current.user.id),
        email: Some(current.user.email.clone()),
        role: role.map(|r| r.role),
        profile_complete: profile.as_ref().is_some_and(|p| p.is_complete()),
        profile: profile.as_ref().map(ProfileCard::from),
    }))
}
