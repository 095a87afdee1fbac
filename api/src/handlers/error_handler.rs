//! Mapping of domain and request errors to HTTP responses

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use blog_core::errors::{AuthError, DomainError, TokenError};
use blog_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
        },
        DomainError::Token(TokenError::TokenGenerationFailed) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
    }
}

/// Convert a domain error into a JSON error response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    // Internal details stay in the log
    let message = if status.is_server_error() {
        tracing::error!(error = ?error, "Request failed");
        "An internal error occurred".to_string()
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
        error.to_string()
    };

    HttpResponse::build(status).json(ErrorResponse::new(error.error_code(), message))
}

/// 400 response listing the fields that failed validation
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }

    HttpResponse::BadRequest().json(response)
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message));
    actix_web::error::InternalError::from_response(err, response).into()
}
