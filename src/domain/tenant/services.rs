use std::sync::Arc;
use uuid::Uuid;

use super::{
  entities::Tenant, errors::TenantError, ports::TenantRepository, value_objects::TenantName,
};

/// Tenant service implementing tenant profile rules
pub struct TenantService {
  tenant_repo: Arc<dyn TenantRepository>,
}

impl TenantService {
  pub fn new(tenant_repo: Arc<dyn TenantRepository>) -> Self {
    Self { tenant_repo }
  }

  /// Load a tenant by id
  pub async fn get_tenant(&self, tenant_id: Uuid) -> Result<Tenant, TenantError> {
    self
      .tenant_repo
      .find_by_id(tenant_id)
      .await?
      .ok_or(TenantError::NotFound)
  }

  /// Rename a tenant, leaving every other field untouched
  pub async fn rename_tenant(
    &self,
    tenant_id: Uuid,
    name: TenantName,
  ) -> Result<Tenant, TenantError> {
    let mut tenant = self.get_tenant(tenant_id).await?;
    let previous_name = tenant.name.clone();

    tenant.rename(name);
    let updated = self.tenant_repo.update(tenant).await?;

    tracing::info!(
      tenant_id = %updated.id,
      previous_name = %previous_name,
      new_name = %updated.name,
      "Tenant renamed"
    );

    Ok(updated)
  }
}
