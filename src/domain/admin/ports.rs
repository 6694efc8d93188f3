use async_trait::async_trait;
use uuid::Uuid;

use super::{
  entities::{Admin, SystemAdmin},
  errors::AdminError,
};
use crate::domain::auth::value_objects::Email;

#[async_trait]
pub trait AdminRepository: Send + Sync {
  async fn create(&self, admin: Admin) -> Result<Admin, AdminError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminError>;
  async fn find_by_email(&self, email: &Email) -> Result<Option<Admin>, AdminError>;
  async fn update(&self, admin: Admin) -> Result<Admin, AdminError>;
}

#[async_trait]
pub trait SystemAdminRepository: Send + Sync {
  async fn create(&self, system_admin: SystemAdmin) -> Result<SystemAdmin, AdminError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemAdmin>, AdminError>;
  async fn find_by_email(&self, email: &Email) -> Result<Option<SystemAdmin>, AdminError>;
}
