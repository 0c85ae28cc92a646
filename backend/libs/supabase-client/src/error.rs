/// Error types for the Supabase client
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Auth service rejected the call; message is the remote text verbatim
    /// so callers can surface it to the user unchanged.
    #[error("{0}")]
    Auth(String),

    /// Data API rejected the call (query error, policy violation, ...).
    #[error("{0}")]
    Api(String),

    /// A `.single()` read matched zero rows (or more than one).
    #[error("row not found")]
    NotFound,

    /// Transport-level failure before any remote response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Pull a human-readable message out of a GoTrue/PostgREST error body.
///
/// GoTrue reports `error_description` or `msg`; PostgREST reports
/// `message`. Anything else degrades to the HTTP status line.
pub(crate) fn remote_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("HTTP {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn extracts_gotrue_error_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            remote_message(StatusCode::BAD_REQUEST, body),
            "Invalid login credentials"
        );
    }

    #[test]
    fn extracts_gotrue_msg() {
        let body = r#"{"code":422,"msg":"Signup requires a valid password"}"#;
        assert_eq!(
            remote_message(StatusCode::UNPROCESSABLE_ENTITY, body),
            "Signup requires a valid password"
        );
    }

    #[test]
    fn extracts_postgrest_message() {
        let body = r#"{"code":"42P01","message":"relation \"missing\" does not exist"}"#;
        assert_eq!(
            remote_message(StatusCode::NOT_FOUND, body),
            "relation \"missing\" does not exist"
        );
    }

    #[test]
    fn falls_back_to_status_line() {
        assert_eq!(remote_message(StatusCode::BAD_GATEWAY, "<html>"), "HTTP 502");
    }
}
