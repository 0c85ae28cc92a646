//! Shared Supabase client
//!
//! Thin typed wrapper over the two hosted Supabase surfaces the platform
//! delegates to: the GoTrue auth API (password sign-in, current user,
//! sign-out) and the PostgREST data API (filtered reads and single-row
//! writes against named tables). Every service talks to the store through
//! this crate; no service holds its own database connection.

pub mod auth;
pub mod error;
pub mod postgrest;

pub use auth::{AuthUser, Session};
pub use error::SupabaseError;
pub use postgrest::QueryBuilder;

/// Connection settings for the hosted store.
///
/// Both values are externally supplied and required at process start.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Public anon API key sent as the `apikey` header on every call
    pub anon_key: String,
}

/// Handle to the hosted Supabase backend.
///
/// Cheap to clone; the underlying `reqwest::Client` is a connection pool.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Build a client from configuration.
    ///
    /// Fails when either value is missing; callers treat that as a fatal
    /// startup condition.
    pub fn new(config: SupabaseConfig) -> Result<Self, SupabaseError> {
        if config.url.trim().is_empty() {
            return Err(SupabaseError::Config("store URL is empty".into()));
        }
        if config.anon_key.trim().is_empty() {
            return Err(SupabaseError::Config("anon API key is empty".into()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
        })
    }

    /// Start a PostgREST query against a named table.
    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self.clone(), table)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_configuration() {
        let err = SupabaseClient::new(SupabaseConfig {
            url: "".into(),
            anon_key: "key".into(),
        })
        .unwrap_err();
        assert!(matches!(err, SupabaseError::Config(_)));

        let err = SupabaseClient::new(SupabaseConfig {
            url: "https://x.supabase.co".into(),
            anon_key: "   ".into(),
        })
        .unwrap_err();
        assert!(matches!(err, SupabaseError::Config(_)));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = SupabaseClient::new(SupabaseConfig {
            url: "https://x.supabase.co/".into(),
            anon_key: "key".into(),
        })
        .unwrap();
        assert_eq!(client.rest_url("profiles"), "https://x.supabase.co/rest/v1/profiles");
        assert_eq!(client.auth_url("token"), "https://x.supabase.co/auth/v1/token");
    }
}
