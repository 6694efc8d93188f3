use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::admin::AllowAdminPasswordResetResponse;
use crate::application::tenant::TenantDetails;

/// Confirmation returned with every password reset grant
pub const PASSWORD_RESET_ALLOWED_MESSAGE: &str =
  "パスワードリセットを許可しました。有効期限は24時間です。";

/// Request for admin login (tenant admins and system admins alike)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Response after successful tenant admin login
#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginResponse {
  pub admin_id: Uuid,
  pub tenant_id: Uuid,
  pub email: String,

  /// Bearer token for the `Authorization` header
  pub session_token: String,

  pub expires_at: DateTime<Utc>,
}

/// Response after successful system admin login
#[derive(Debug, Clone, Serialize)]
pub struct SystemAdminLoginResponse {
  pub system_admin_id: Uuid,
  pub email: String,
  pub session_token: String,
  pub expires_at: DateTime<Utc>,
}

/// Request to set a new password using an open reset grant
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordResetRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub new_password: String,
}

/// Response for `POST /api/v1/admin/admins/{admin_id}/allow-password-reset`
#[derive(Debug, Clone, Serialize)]
pub struct AllowPasswordResetResponse {
  pub target_admin_id: Uuid,
  pub target_email: String,
  pub tenant_id: Uuid,
  pub allowed_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
  pub message: String,
}

impl From<AllowAdminPasswordResetResponse> for AllowPasswordResetResponse {
  fn from(grant: AllowAdminPasswordResetResponse) -> Self {
    Self {
      target_admin_id: grant.target_admin_id,
      target_email: grant.target_email,
      tenant_id: grant.tenant_id,
      allowed_at: grant.allowed_at,
      expires_at: grant.expires_at,
      message: PASSWORD_RESET_ALLOWED_MESSAGE.to_string(),
    }
  }
}

/// Request body for `PUT /api/v1/tenants/me`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTenantRequest {
  pub tenant_name: String,
}

/// Tenant profile as rendered by both tenant endpoints
#[derive(Debug, Clone, Serialize)]
pub struct TenantResponse {
  pub tenant_id: Uuid,
  pub tenant_name: String,
  pub timezone: String,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<TenantDetails> for TenantResponse {
  fn from(details: TenantDetails) -> Self {
    Self {
      tenant_id: details.tenant_id,
      tenant_name: details.tenant_name,
      timezone: details.timezone,
      is_active: details.is_active,
      created_at: details.created_at,
      updated_at: details.updated_at,
    }
  }
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
