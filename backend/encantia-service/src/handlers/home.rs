/// Home page: sign-in view for visitors, user area for members
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::handlers::profiles::fetch_own_profile;
use crate::middleware::MaybeUser;
use crate::models::profile::ProfileCard;
use crate::services::navigation::{NavButton, LOGO_URL, NAV_BUTTONS};
use crate::AppState;

/// Descriptor of the sign-in form rendered for visitors.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignInForm {
    pub action: &'static str,
    pub fields: &'static [&'static str],
}

/// View every page returns when no session is present. No store tables
/// are consulted to build it.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignedOutView {
    pub signed_in: bool,
    pub sign_in: SignInForm,
}

pub fn signed_out_view() -> SignedOutView {
    SignedOutView {
        signed_in: false,
        sign_in: SignInForm {
            action: "/api/v1/auth/login",
            fields: &["email", "password"],
        },
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserAreaView {
    pub signed_in: bool,
    pub profile: Option<ProfileCard>,
    /// When false the client shows the profile-completion form before
    /// anything else.
    pub profile_complete: bool,
    pub nav: &'static [NavButton],
    pub logo: &'static str,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "User area, or the sign-in view when no session is present")
    )
)]
pub async fn home(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    // A missing or unreadable profile is not fatal on the home page; the
    // completion form takes over.
    let profile = fetch_own_profile(&state, &current).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load own profile for home view");
        None
    });

    let view = UserAreaView {
        signed_in: true,
        profile_complete: profile.as_ref().is_some_and(|p| p.is_complete()),
        profile: profile.as_ref().map(ProfileCard::from),
        nav: NAV_BUTTONS,
        logo: LOGO_URL,
    };
    Ok(HttpResponse::Ok().json(view))
}
