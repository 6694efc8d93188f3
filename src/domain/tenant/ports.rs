use async_trait::async_trait;
use uuid::Uuid;

use super::{entities::Tenant, errors::TenantError};

#[async_trait]
pub trait TenantRepository: Send + Sync {
  async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, TenantError>;
  /// Persists the tenant; `TenantError::NotFound` if the row no longer exists
  async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError>;
}
