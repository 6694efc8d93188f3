//! In-process repositories backed by `tokio::sync::RwLock<HashMap<..>>`
//!
//! Used by the test suites and by local runs that don't need PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::admin::{Admin, AdminError, AdminRepository, SystemAdmin, SystemAdminRepository};
use crate::domain::auth::{
  AuthError, Principal, RepositoryError, Session, SessionRepository, value_objects::Email,
};
use crate::domain::tenant::{Tenant, TenantError, TenantRepository};

#[derive(Default)]
pub struct InMemoryTenantRepository {
  tenants: RwLock<HashMap<Uuid, Tenant>>,
}

impl InMemoryTenantRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
  async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    let mut tenants = self.tenants.write().await;
    if tenants.contains_key(&tenant.id) {
      return Err(RepositoryError::DuplicateKey(format!("tenant {}", tenant.id)).into());
    }
    tenants.insert(tenant.id, tenant.clone());
    Ok(tenant)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, TenantError> {
    Ok(self.tenants.read().await.get(&id).cloned())
  }

  async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    let mut tenants = self.tenants.write().await;
    match tenants.get_mut(&tenant.id) {
      Some(stored) => {
        *stored = tenant.clone();
        Ok(tenant)
      }
      None => Err(TenantError::NotFound),
    }
  }
}

#[derive(Default)]
pub struct InMemoryAdminRepository {
  admins: RwLock<HashMap<Uuid, Admin>>,
}

impl InMemoryAdminRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
  async fn create(&self, admin: Admin) -> Result<Admin, AdminError> {
    let mut admins = self.admins.write().await;
    let taken = admins
      .values()
      .any(|existing| existing.id == admin.id || existing.email.eq_ignore_ascii_case(&admin.email));
    if taken {
      return Err(RepositoryError::DuplicateKey(format!("admin {}", admin.email)).into());
    }
    admins.insert(admin.id, admin.clone());
    Ok(admin)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminError> {
    Ok(self.admins.read().await.get(&id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<Admin>, AdminError> {
    let admins = self.admins.read().await;
    Ok(
      admins
        .values()
        .find(|admin| admin.email.eq_ignore_ascii_case(email.as_str()))
        .cloned(),
    )
  }

  async fn update(&self, admin: Admin) -> Result<Admin, AdminError> {
    let mut admins = self.admins.write().await;
    match admins.get_mut(&admin.id) {
      Some(stored) => {
        *stored = admin.clone();
        Ok(admin)
      }
      None => Err(AdminError::NotFound),
    }
  }
}

#[derive(Default)]
pub struct InMemorySystemAdminRepository {
  system_admins: RwLock<HashMap<Uuid, SystemAdmin>>,
}

impl InMemorySystemAdminRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl SystemAdminRepository for InMemorySystemAdminRepository {
  async fn create(&self, system_admin: SystemAdmin) -> Result<SystemAdmin, AdminError> {
    let mut system_admins = self.system_admins.write().await;
    let taken = system_admins.values().any(|existing| {
      existing.id == system_admin.id || existing.email.eq_ignore_ascii_case(&system_admin.email)
    });
    if taken {
      return Err(
        RepositoryError::DuplicateKey(format!("system admin {}", system_admin.email)).into(),
      );
    }
    system_admins.insert(system_admin.id, system_admin.clone());
    Ok(system_admin)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemAdmin>, AdminError> {
    Ok(self.system_admins.read().await.get(&id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<SystemAdmin>, AdminError> {
    let system_admins = self.system_admins.read().await;
    Ok(
      system_admins
        .values()
        .find(|system_admin| system_admin.email.eq_ignore_ascii_case(email.as_str()))
        .cloned(),
    )
  }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
  sessions: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn count_for_principal(&self, principal: &Principal) -> usize {
    self
      .sessions
      .read()
      .await
      .values()
      .filter(|session| same_subject(&session.principal, principal))
      .count()
  }
}

fn same_subject(a: &Principal, b: &Principal) -> bool {
  a.as_str() == b.as_str() && a.subject_id() == b.subject_id()
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
  async fn create(&self, session: Session) -> Result<Session, AuthError> {
    let mut sessions = self.sessions.write().await;
    if sessions
      .values()
      .any(|existing| existing.token_hash == session.token_hash)
    {
      return Err(RepositoryError::DuplicateKey("session token".to_string()).into());
    }
    sessions.insert(session.id, session.clone());
    Ok(session)
  }

  async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AuthError> {
    let sessions = self.sessions.read().await;
    Ok(
      sessions
        .values()
        .find(|session| session.token_hash == token_hash)
        .cloned(),
    )
  }

  async fn update_activity(&self, session_id: Uuid) -> Result<(), AuthError> {
    let mut sessions = self.sessions.write().await;
    let session = sessions
      .get_mut(&session_id)
      .ok_or(RepositoryError::NotFound)?;
    session.last_activity_at = Utc::now();
    Ok(())
  }

  async fn delete(&self, session_id: Uuid) -> Result<(), AuthError> {
    self.sessions.write().await.remove(&session_id);
    Ok(())
  }

  async fn delete_all_for_principal(&self, principal: &Principal) -> Result<u64, AuthError> {
    let mut sessions = self.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| !same_subject(&session.principal, principal));
    Ok((before - sessions.len()) as u64)
  }
}
