use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::tenant::{Tenant, TenantError, TenantService};

/// Tenant profile as seen by the tenant's own admins
#[derive(Debug, Clone)]
pub struct TenantDetails {
  pub tenant_id: Uuid,
  pub tenant_name: String,
  pub timezone: String,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<Tenant> for TenantDetails {
  fn from(tenant: Tenant) -> Self {
    Self {
      tenant_id: tenant.id,
      tenant_name: tenant.name,
      timezone: tenant.timezone,
      is_active: tenant.is_active,
      created_at: tenant.created_at,
      updated_at: tenant.updated_at,
    }
  }
}

pub struct GetCurrentTenantUseCase {
  tenant_service: Arc<TenantService>,
}

impl GetCurrentTenantUseCase {
  pub fn new(tenant_service: Arc<TenantService>) -> Self {
    Self { tenant_service }
  }

  /// Loads the tenant resolved from the caller's session
  ///
  /// # Errors
  /// Returns `TenantError::NotFound` if the tenant no longer exists
  pub async fn execute(&self, tenant_id: Uuid) -> Result<TenantDetails, TenantError> {
    let tenant = self.tenant_service.get_tenant(tenant_id).await?;
    Ok(tenant.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::tenant::{TenantName, TenantRepository};
  use crate::infrastructure::persistence::memory::InMemoryTenantRepository;

  #[tokio::test]
  async fn test_get_current_tenant() {
    let repo = Arc::new(InMemoryTenantRepository::new());
    let tenant = repo
      .create(Tenant::new(TenantName::new("Sakura Diner").unwrap(), "Asia/Tokyo"))
      .await
      .unwrap();
    let use_case = GetCurrentTenantUseCase::new(Arc::new(TenantService::new(repo)));

    let details = use_case.execute(tenant.id).await.unwrap();

    assert_eq!(details.tenant_id, tenant.id);
    assert_eq!(details.tenant_name, "Sakura Diner");
    assert_eq!(details.timezone, "Asia/Tokyo");
    assert!(details.is_active);
  }

  #[tokio::test]
  async fn test_unknown_tenant() {
    let repo = Arc::new(InMemoryTenantRepository::new());
    let use_case = GetCurrentTenantUseCase::new(Arc::new(TenantService::new(repo)));

    let result = use_case.execute(Uuid::new_v4()).await;

    assert!(matches!(result, Err(TenantError::NotFound)));
  }
}
