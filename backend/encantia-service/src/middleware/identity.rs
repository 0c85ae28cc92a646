/// Identity extraction against the hosted auth service
///
/// `CurrentUser` resolves the bearer token to an identity and rejects the
/// request when that fails. `MaybeUser` is the session gate used by page
/// views: any retrieval failure is treated as "signed out", never as an
/// error, and no retry is attempted.
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use supabase_client::AuthUser;

use crate::error::AppError;
use crate::AppState;

/// Message shown when a protected call arrives without a usable identity.
pub const NOT_SIGNED_IN_MESSAGE: &str = "No hay usuario autenticado.";

/// Authenticated caller: identity plus the access token used to act on
/// the caller's behalf against the store.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: AuthUser,
    pub access_token: String,
}

async fn resolve_user(req: HttpRequest) -> Result<CurrentUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::Config("application state missing".to_string()))?;

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Auth(NOT_SIGNED_IN_MESSAGE.to_string()))?
        .to_string();

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth(NOT_SIGNED_IN_MESSAGE.to_string()))?;

    let user = state.supabase.get_user(token).await.map_err(|e| {
        tracing::debug!(error = %e, "identity lookup failed");
        AppError::Auth(NOT_SIGNED_IN_MESSAGE.to_string())
    })?;

    Ok(CurrentUser {
        user,
        access_token: token.to_string(),
    })
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(resolve_user(req))
    }
}

/// Session gate for page views: `None` renders the signed-out view.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { Ok(MaybeUser(resolve_user(req).await.ok())) })
    }
}
