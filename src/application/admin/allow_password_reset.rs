use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::admin::{AdminError, AdminService};

#[derive(Debug, Clone)]
pub struct AllowAdminPasswordResetCommand {
  /// Operator granting the reset
  pub system_admin_id: Uuid,
  /// Tenant admin allowed to reset their password
  pub target_admin_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct AllowAdminPasswordResetResponse {
  pub target_admin_id: Uuid,
  pub target_email: String,
  pub tenant_id: Uuid,
  pub allowed_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}

/// Use case for opening a password reset window on behalf of a tenant admin
pub struct AllowAdminPasswordResetUseCase {
  admin_service: Arc<AdminService>,
}

impl AllowAdminPasswordResetUseCase {
  pub fn new(admin_service: Arc<AdminService>) -> Self {
    Self { admin_service }
  }

  /// # Errors
  /// - `AdminError::NotFound` if the target admin does not exist
  /// - `AdminError::SystemAdminNotFound` / `SystemAdminInactive` for an unusable operator account
  pub async fn execute(
    &self,
    command: AllowAdminPasswordResetCommand,
  ) -> Result<AllowAdminPasswordResetResponse, AdminError> {
    let grant = self
      .admin_service
      .allow_password_reset(command.system_admin_id, command.target_admin_id)
      .await?;

    Ok(AllowAdminPasswordResetResponse {
      target_admin_id: grant.target_admin_id,
      target_email: grant.target_email,
      tenant_id: grant.tenant_id,
      allowed_at: grant.allowed_at,
      expires_at: grant.expires_at,
    })
  }
}
