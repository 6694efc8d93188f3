use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{
  entities::PasswordResetGrant,
  errors::AdminError,
  ports::{AdminRepository, SystemAdminRepository},
};

/// Admin service implementing cross-tenant administrative actions
pub struct AdminService {
  admin_repo: Arc<dyn AdminRepository>,
  system_admin_repo: Arc<dyn SystemAdminRepository>,
}

impl AdminService {
  pub fn new(
    admin_repo: Arc<dyn AdminRepository>,
    system_admin_repo: Arc<dyn SystemAdminRepository>,
  ) -> Self {
    Self {
      admin_repo,
      system_admin_repo,
    }
  }

  /// Allow a tenant admin to reset their password for the next 24 hours
  ///
  /// # Errors
  /// - `AdminError::SystemAdminNotFound` / `SystemAdminInactive` if the acting operator is unknown or disabled
  /// - `AdminError::NotFound` if the target admin does not exist
  pub async fn allow_password_reset(
    &self,
    system_admin_id: Uuid,
    target_admin_id: Uuid,
  ) -> Result<PasswordResetGrant, AdminError> {
    let system_admin = self
      .system_admin_repo
      .find_by_id(system_admin_id)
      .await?
      .ok_or(AdminError::SystemAdminNotFound)?;

    if !system_admin.is_active {
      return Err(AdminError::SystemAdminInactive);
    }

    let mut admin = self
      .admin_repo
      .find_by_id(target_admin_id)
      .await?
      .ok_or(AdminError::NotFound)?;

    let grant = admin.allow_password_reset(system_admin.id, Utc::now());
    self.admin_repo.update(admin).await?;

    tracing::info!(
      system_admin_id = %system_admin.id,
      target_admin_id = %grant.target_admin_id,
      tenant_id = %grant.tenant_id,
      expires_at = %grant.expires_at,
      "Password reset allowed"
    );

    Ok(grant)
  }
}
