/// Profile pages: public profile view, follow, description and
/// profile-completion saves, and the staff-only user list
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::{CurrentUser, MaybeUser};
use crate::models::profile::{FollowerRelation, Profile, ProfileCard};
use crate::AppState;

/// Inline error shown when the follower section cannot be loaded.
pub const FOLLOWERS_ERROR: &str = "No se pudo cargar los seguidores.";

/// Forbidden message for the staff user list.
pub const USERS_FORBIDDEN: &str = "No tienes acceso a esta página.";

pub(crate) async fn fetch_own_profile(
    state: &AppState,
    current: &CurrentUser,
) -> Result<Option<Profile>> {
    let profile = state
        .supabase
        .from("profiles")
        .eq("email", &current.user.email)
        .auth(&current.access_token)
        .fetch_optional::<Profile>()
        .await?;
    Ok(profile)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileDetails {
    pub user_id: Option<Uuid>,
    pub name: String,
    pub avatar_url: String,
    pub role: String,
    pub description: String,
}

impl From<&Profile> for ProfileDetails {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id,
            name: profile.name.clone().unwrap_or_default(),
            avatar_url: profile.avatar_or_default(),
            role: profile.role_label(),
            description: profile.description_or_default(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileView {
    pub profile: ProfileDetails,
    pub followers_count: usize,
    pub followers: Vec<ProfileCard>,
    pub is_following: bool,
    pub is_own_profile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FollowerId {
    follower_id: Uuid,
}

/// GET /api/v1/profiles/{user_id}
///
/// Public: visitors see the profile too, just without follow state.
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{user_id}",
    tag = "profiles",
    responses(
        (status = 200, description = "Profile with follower details", body = ProfileView),
        (status = 404, description = "No profile for that user id")
    )
)]
pub async fn profile_view(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    session: MaybeUser,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    let profile = state
        .supabase
        .from("profiles")
        .eq("user_id", user_id)
        .fetch_optional::<Profile>()
        .await?
        .ok_or_else(|| AppError::NotFound("No se pudo cargar el perfil.".to_string()))?;

    // Follower failures degrade to an inline error; the profile itself
    // still renders.
    let mut error = None;
    let follower_ids = match state
        .supabase
        .from("followers")
        .select("follower_id")
        .eq("followed_id", user_id)
        .fetch::<Vec<FollowerId>>()
        .await
    {
        Ok(rows) => rows.into_iter().map(|r| r.follower_id).collect(),
        Err(e) => {
            tracing::warn!(error = %e, %user_id, "failed to load followers");
            error = Some(FOLLOWERS_ERROR.to_string());
            Vec::new()
        }
    };

    let followers = if follower_ids.is_empty() {
        Vec::new()
    } else {
        match state
            .supabase
            .from("profiles")
            .select("user_id, name, avatar_url")
            .in_list("user_id", &follower_ids)
            .fetch::<Vec<Profile>>()
            .await
        {
            Ok(rows) => rows.iter().map(ProfileCard::from).collect(),
            Err(e) => {
                tracing::warn!(error = %e, %user_id, "failed to load follower profiles");
                error = Some(FOLLOWERS_ERROR.to_string());
                Vec::new()
            }
        }
    };

    let viewer_id = session.0.as_ref().map(|c| c.user.id);
    let view = ProfileView {
        profile: ProfileDetails::from(&profile),
        followers_count: follower_ids.len(),
        is_following: viewer_id.is_some_and(|id| follower_ids.contains(&id)),
        is_own_profile: viewer_id == Some(user_id),
        followers,
        error,
    };
    Ok(HttpResponse::Ok().json(view))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowResponse {
    pub is_following: bool,
    /// False when the relation already existed and no row was written.
    pub created: bool,
    pub followers_count: usize,
}

/// POST /api/v1/profiles/{user_id}/follow
///
/// Idempotent: following an already-followed profile writes nothing.
#[utoipa::path(
    post,
    path = "/api/v1/profiles/{user_id}/follow",
    tag = "profiles",
    responses(
        (status = 200, description = "Follow state after the call", body = FollowResponse),
        (status = 401, description = "No session")
    )
)]
pub async fn follow(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    current: CurrentUser,
) -> Result<HttpResponse> {
    let followed_id = path.into_inner();

    let existing = state
        .supabase
        .from("followers")
        .select("follower_id")
        .eq("follower_id", current.user.id)
        .eq("followed_id", followed_id)
        .auth(&current.access_token)
        .fetch::<Vec<FollowerId>>()
        .await?;

    let created = existing.is_empty();
    if created {
        state
            .supabase
            .from("followers")
            .auth(&current.access_token)
            .insert(&[FollowerRelation {
                follower_id: current.user.id,
                followed_id,
            }])
            .await?;
        tracing::info!(follower = %current.user.id, followed = %followed_id, "follow created");
    }

    let followers = state
        .supabase
        .from("followers")
        .select("follower_id")
        .eq("followed_id", followed_id)
        .fetch::<Vec<FollowerId>>()
        .await?;

    Ok(HttpResponse::Ok().json(FollowResponse {
        is_following: true,
        created,
        followers_count: followers.len(),
    }))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDescriptionRequest {
    #[validate(length(min = 1, message = "La descripción no puede estar vacía."))]
    pub description: String,
}

#[derive(Serialize)]
struct DescriptionPatch<'a> {
    description: &'a str,
}

/// PUT /api/v1/profiles/description
#[utoipa::path(
    put,
    path = "/api/v1/profiles/description",
    tag = "profiles",
    request_body = UpdateDescriptionRequest,
    responses(
        (status = 200, description = "Description stored"),
        (status = 401, description = "No session")
    )
)]
pub async fn update_description(
    state: web::Data<AppState>,
    current: CurrentUser,
    payload: web::Json<UpdateDescriptionRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    state
        .supabase
        .from("profiles")
        .eq("user_id", current.user.id)
        .auth(&current.access_token)
        .update(&DescriptionPatch {
            description: &payload.description,
        })
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "description": payload.description })))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveProfileRequest {
    #[validate(length(
        min = 1,
        message = "El nombre de usuario y la foto de perfil son obligatorios."
    ))]
    pub name: String,
    #[validate(length(
        min = 1,
        message = "El nombre de usuario y la foto de perfil son obligatorios."
    ))]
    pub avatar_url: String,
}

#[derive(Serialize)]
struct ProfilePatch<'a> {
    name: &'a str,
    avatar_url: &'a str,
}

#[derive(Serialize)]
struct NewProfileRow<'a> {
    user_id: Uuid,
    email: &'a str,
    name: &'a str,
    avatar_url: &'a str,
}

/// PUT /api/v1/profile
///
/// Profile-completion save: updates the row keyed by the session email,
/// creating it on first save.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "profiles",
    request_body = SaveProfileRequest,
    responses(
        (status = 200, description = "Profile stored", body = ProfileCard),
        (status = 400, description = "Missing name or avatar"),
        (status = 401, description = "No session")
    )
)]
pub async fn save_profile(
    state: web::Data<AppState>,
    current: CurrentUser,
    payload: web::Json<SaveProfileRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let existing = fetch_own_profile(&state, &current).await?;
    if existing.is_some() {
        state
            .supabase
            .from("profiles")
            .eq("email", &current.user.email)
            .auth(&current.access_token)
            .update(&ProfilePatch {
                name: &payload.name,
                avatar_url: &payload.avatar_url,
            })
            .await?;
    } else {
        state
            .supabase
            .from("profiles")
            .auth(&current.access_token)
            .insert(&[NewProfileRow {
                user_id: current.user.id,
                email: &current.user.email,
                name: &payload.name,
                avatar_url: &payload.avatar_url,
            }])
            .await?;
    }

    Ok(HttpResponse::Ok().json(ProfileCard {
        user_id: Some(current.user.id),
        name: payload.name.clone(),
        avatar_url: payload.avatar_url.clone(),
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffUserView {
    pub user_id: Option<Uuid>,
    pub name: String,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UsersView {
    pub users: Vec<StaffUserView>,
}

/// GET /api/v1/users
///
/// Staff-only directory of every profile. The role check runs here, not
/// in the client.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "profiles",
    responses(
        (status = 200, description = "All profiles", body = UsersView),
        (status = 401, description = "No session"),
        (status = 403, description = "Caller role is not Owner+")
    )
)]
pub async fn users(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    let profile = fetch_own_profile(&state, &current).await?;
    if !profile.as_ref().is_some_and(Profile::is_owner_plus) {
        return Err(AppError::Forbidden(USERS_FORBIDDEN.to_string()));
    }

    let profiles = state
        .supabase
        .from("profiles")
        .auth(&current.access_token)
        .fetch::<Vec<Profile>>()
        .await?;

    let users = profiles
        .iter()
        .map(|p| StaffUserView {
            user_id: p.user_id,
            name: p.name.clone().unwrap_or_default(),
            avatar_url: p.avatar_or_default(),
            handle: p.user.clone(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(UsersView { users }))
}
