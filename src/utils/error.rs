use actix_web::HttpResponse;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    InvalidRequest(String),
    NotFound(String),
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Message exposed to the caller in the `{error}` body.
    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidRequest(msg)
            | AppError::NotFound(msg)
            | AppError::DatabaseError(msg) => msg,
        }
    }
}

/// Maps an AppError to the HTTP contract: 400 for invalid requests, 404 for
/// missing users, 500 for any store failure (underlying cause never exposed).
pub fn error_response(error: &AppError) -> HttpResponse {
    let body = serde_json::json!({ "error": error.message() });
    match error {
        AppError::InvalidRequest(_) => HttpResponse::BadRequest().json(body),
        AppError::NotFound(_) => HttpResponse::NotFound().json(body),
        AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let err = AppError::DatabaseError("connection reset".to_string());
        assert_eq!(err.to_string(), "Database error: connection reset");
        assert_eq!(err.message(), "connection reset");
    }

    #[test]
    fn response_status_follows_variant() {
        let cases = [
            (AppError::InvalidRequest("Username is required".into()), 400),
            (AppError::NotFound("User not found".into()), 404),
            (AppError::DatabaseError("Error saving user".into()), 500),
        ];
        for (err, status) in cases {
            assert_eq!(error_response(&err).status().as_u16(), status);
        }
    }
}
