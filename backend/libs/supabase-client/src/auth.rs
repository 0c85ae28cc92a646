/// GoTrue auth API wrappers
///
/// Covers the three calls the application makes: password sign-in,
/// current-user lookup from an access token, and sign-out.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{remote_message, SupabaseError};
use crate::SupabaseClient;

/// Identity record returned by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    /// Free-form metadata (display name, avatar) set at signup time.
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// Session returned by a successful password sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

impl SupabaseClient {
    /// Exchange email + password for a session.
    ///
    /// On rejection the remote error text is carried verbatim in
    /// `SupabaseError::Auth`.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, SupabaseError> {
        let response = self
            .http()
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", self.anon_key())
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SupabaseError::Auth(remote_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Resolve the identity behind an access token.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, SupabaseError> {
        let response = self
            .http()
            .get(self.auth_url("user"))
            .header("apikey", self.anon_key())
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SupabaseError::Auth(remote_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Invalidate the session behind an access token.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        let response = self
            .http()
            .post(self.auth_url("logout"))
            .header("apikey", self.anon_key())
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(SupabaseError::Auth(remote_message(status, &body)));
        }
        Ok(())
    }
}
