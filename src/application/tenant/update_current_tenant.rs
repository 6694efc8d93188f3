use std::sync::Arc;
use uuid::Uuid;

use super::get_current_tenant::TenantDetails;
use crate::domain::tenant::{TenantError, TenantName, TenantService};

#[derive(Debug, Clone)]
pub struct UpdateCurrentTenantCommand {
  pub tenant_id: Uuid,
  pub tenant_name: String,
}

pub struct UpdateCurrentTenantUseCase {
  tenant_service: Arc<TenantService>,
}

impl UpdateCurrentTenantUseCase {
  pub fn new(tenant_service: Arc<TenantService>) -> Self {
    Self { tenant_service }
  }

  /// Renames the caller's tenant
  ///
  /// # Errors
  /// - `TenantError::Validation` if the name is blank or longer than 255 characters
  /// - `TenantError::NotFound` if the tenant no longer exists
  pub async fn execute(
    &self,
    command: UpdateCurrentTenantCommand,
  ) -> Result<TenantDetails, TenantError> {
    let name = TenantName::new(command.tenant_name)?;

    let tenant = self
      .tenant_service
      .rename_tenant(command.tenant_id, name)
      .await?;

    Ok(tenant.into())
  }
}
