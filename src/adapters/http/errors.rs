use actix_web::{
  HttpRequest, HttpResponse,
  error::{JsonPayloadError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::admin::AdminError;
use crate::domain::auth::errors::AuthError;
use crate::domain::tenant::TenantError;

use super::dtos::ErrorResponse;

/// Message returned when the target of a password reset grant does not exist
pub const ADMIN_NOT_FOUND_MESSAGE: &str = "指定された管理者が見つかりません";

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Malformed or missing request parameter (400 Bad Request)
  BadRequest(String),

  /// Domain validation error (400 Bad Request)
  Validation(String),

  /// Requested resource does not exist (404 Not Found)
  NotFound(String),

  /// Tenant behind the session no longer exists (404 Not Found)
  TenantNotFound,

  /// Authentication error (401 Unauthorized or 403 Forbidden)
  Auth(AuthErrorKind),

  /// Caller is authenticated but may not do this (403 Forbidden)
  Forbidden(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug)]
pub enum AuthErrorKind {
  /// Invalid credentials (401)
  InvalidCredentials,

  /// Session expired or invalid (401)
  InvalidSession,

  /// Missing or malformed bearer token (401)
  InvalidToken,

  /// Reset attempted without an open grant (403)
  PasswordResetNotAllowed,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::TenantNotFound => write!(f, "Tenant not found"),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) | ApiError::TenantNotFound => StatusCode::NOT_FOUND,
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthErrorKind::InvalidSession => StatusCode::UNAUTHORIZED,
        AuthErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthErrorKind::PasswordResetNotAllowed => StatusCode::FORBIDDEN,
      },
      ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::BadRequest(msg) => ("bad_request", msg.clone()),
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::TenantNotFound => ("tenant_not_found", "Tenant not found".to_string()),
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => (
          "invalid_credentials",
          "Invalid email or password".to_string(),
        ),
        AuthErrorKind::InvalidSession => {
          ("invalid_session", "Invalid or expired session".to_string())
        }
        AuthErrorKind::InvalidToken => (
          "invalid_token",
          "Invalid or missing authorization token".to_string(),
        ),
        AuthErrorKind::PasswordResetNotAllowed => (
          "password_reset_not_allowed",
          "Password reset is not allowed for this account".to_string(),
        ),
      },
      ApiError::Forbidden(msg) => ("forbidden", msg.clone()),
      ApiError::Internal(msg) => {
        // Details stay in the log
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert AuthError to ApiError
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AuthError::InvalidSession => ApiError::Auth(AuthErrorKind::InvalidSession),
      AuthError::PasswordResetNotAllowed => ApiError::Auth(AuthErrorKind::PasswordResetNotAllowed),
      AuthError::ValueObject(err) => ApiError::Validation(err.to_string()),
      AuthError::Admin(err) => ApiError::from(err),
      AuthError::Repository(err) => ApiError::Internal(err.to_string()),
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert AdminError to ApiError
impl From<AdminError> for ApiError {
  fn from(error: AdminError) -> Self {
    match error {
      AdminError::NotFound => ApiError::NotFound(ADMIN_NOT_FOUND_MESSAGE.to_string()),
      AdminError::SystemAdminNotFound | AdminError::SystemAdminInactive => {
        ApiError::Forbidden("System administrator privileges are required".to_string())
      }
      AdminError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

/// Convert TenantError to ApiError
impl From<TenantError> for ApiError {
  fn from(error: TenantError) -> Self {
    match error {
      TenantError::NotFound => ApiError::TenantNotFound,
      TenantError::Validation(e) => ApiError::Validation(e.to_string()),
      TenantError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

/// Routes JSON extractor failures through `ApiError` so they share the error body
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  ApiError::BadRequest(format!("Invalid JSON body: {}", error)).into()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::errors::{HashError, RepositoryError};
  use crate::domain::tenant::ValidationError;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::BadRequest("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::NotFound("test".to_string()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(ApiError::TenantNotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
      ApiError::Auth(AuthErrorKind::InvalidCredentials).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      ApiError::Auth(AuthErrorKind::PasswordResetNotAllowed).status_code(),
      StatusCode::FORBIDDEN
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_auth_error_conversion() {
    let api_error: ApiError = AuthError::InvalidCredentials.into();
    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);

    let api_error: ApiError = AuthError::Hash(HashError::InvalidFormat).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let api_error: ApiError = AuthError::Admin(AdminError::NotFound).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn test_admin_error_conversion() {
    match ApiError::from(AdminError::NotFound) {
      ApiError::NotFound(msg) => assert_eq!(msg, ADMIN_NOT_FOUND_MESSAGE),
      other => panic!("unexpected error: {:?}", other),
    }

    let api_error: ApiError = AdminError::SystemAdminInactive.into();
    assert_eq!(api_error.status_code(), StatusCode::FORBIDDEN);

    let api_error: ApiError = AdminError::Repository(RepositoryError::NotFound).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_tenant_error_conversion() {
    let api_error: ApiError = TenantError::NotFound.into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = TenantError::Validation(ValidationError::TenantNameEmpty).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn test_internal_error_body_hides_details() {
    let response = ApiError::Internal("connection refused".to_string()).error_response();
    let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "internal_error");
    assert!(!json["message"].as_str().unwrap().contains("connection refused"));
  }
}
