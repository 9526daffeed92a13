use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::EditError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            // A rejected edit leaves the stored document unchanged; the code
            // identifies which invariant the caller tripped.
            AppError::Edit(e) => {
                let code = match e {
                    EditError::InvalidFieldPath(_) => "INVALID_FIELD_PATH",
                    EditError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
                    EditError::InvalidSectionKey(_) => "INVALID_SECTION_KEY",
                };
                (StatusCode::UNPROCESSABLE_ENTITY, code, e.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_errors_map_to_unprocessable_entity() {
        let cases = [
            EditError::InvalidFieldPath("contact.fax".to_string()),
            EditError::IndexOutOfRange { index: 3, len: 1 },
            EditError::InvalidSectionKey("skills".to_string()),
        ];
        for e in cases {
            let response = AppError::from(e).into_response();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("session gone".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
