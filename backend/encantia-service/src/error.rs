/// Error types for the Encantia service
///
/// Errors are converted to JSON HTTP responses for clients. Inline section
/// failures (a list that could not be fetched) are not errors at this
/// level; those stay inside the view models as error strings.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use supabase_client::SupabaseError;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed; message is the remote text verbatim
    #[error("{0}")]
    Auth(String),

    /// A required field was missing before any remote call
    #[error("{0}")]
    Validation(String),

    /// Caller lacks the required role
    #[error("{0}")]
    Forbidden(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// The hosted store rejected or failed a call
    #[error("{0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<SupabaseError> for AppError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::Auth(msg) => AppError::Auth(msg),
            SupabaseError::Api(msg) => AppError::Store(msg),
            SupabaseError::NotFound => AppError::NotFound("row not found".to_string()),
            SupabaseError::Network(e) => AppError::Store(e.to_string()),
            SupabaseError::Decode(msg) => AppError::Store(msg),
            SupabaseError::Config(msg) => AppError::Config(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Surface the first declared message; every field rule in this
        // service carries one.
        let message = err
            .field_errors()
            .into_values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        AppError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert_eq!(
            AppError::Auth("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Store("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn remote_auth_error_keeps_text() {
        let err: AppError = SupabaseError::Auth("Invalid login credentials".into()).into();
        assert_eq!(err.to_string(), "Invalid login credentials");
    }
}
