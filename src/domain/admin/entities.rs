use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long an admin may reset their password after a system admin allows it
pub const PASSWORD_RESET_WINDOW_HOURS: i64 = 24;

/// Tenant-scoped administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
  pub id: Uuid,
  pub tenant_id: Uuid,
  /// Normalized (lowercase) email, unique across tenants
  pub email: String,
  pub name: String,
  /// Argon2id PHC string
  pub password_hash: String,
  pub password_reset_allowed_at: Option<DateTime<Utc>>,
  pub password_reset_expires_at: Option<DateTime<Utc>>,
  /// System admin who issued the current grant
  pub password_reset_allowed_by: Option<Uuid>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Admin {
  pub fn new(tenant_id: Uuid, email: String, name: String, password_hash: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      tenant_id,
      email,
      name,
      password_hash,
      password_reset_allowed_at: None,
      password_reset_expires_at: None,
      password_reset_allowed_by: None,
      created_at: now,
      updated_at: now,
    }
  }

  /// Reconstruct from database
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    tenant_id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    password_reset_allowed_at: Option<DateTime<Utc>>,
    password_reset_expires_at: Option<DateTime<Utc>>,
    password_reset_allowed_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      tenant_id,
      email,
      name,
      password_hash,
      password_reset_allowed_at,
      password_reset_expires_at,
      password_reset_allowed_by,
      created_at,
      updated_at,
    }
  }

  /// Opens a password reset window starting at `now`, replacing any earlier grant
  pub fn allow_password_reset(
    &mut self,
    system_admin_id: Uuid,
    now: DateTime<Utc>,
  ) -> PasswordResetGrant {
    let expires_at = now + Duration::hours(PASSWORD_RESET_WINDOW_HOURS);

    self.password_reset_allowed_at = Some(now);
    self.password_reset_expires_at = Some(expires_at);
    self.password_reset_allowed_by = Some(system_admin_id);
    self.updated_at = now;

    PasswordResetGrant {
      target_admin_id: self.id,
      target_email: self.email.clone(),
      tenant_id: self.tenant_id,
      allowed_by: system_admin_id,
      allowed_at: now,
      expires_at,
    }
  }

  /// Whether a grant exists and is still open at `now`
  pub fn can_reset_password_at(&self, now: DateTime<Utc>) -> bool {
    matches!(self.password_reset_expires_at, Some(expires_at) if now < expires_at)
  }

  /// Stores the new hash and consumes the grant
  pub fn complete_password_reset(&mut self, new_password_hash: String) {
    self.password_hash = new_password_hash;
    self.password_reset_allowed_at = None;
    self.password_reset_expires_at = None;
    self.password_reset_allowed_by = None;
    self.updated_at = Utc::now();
  }
}

/// Operator with cross-tenant administrative privileges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemAdmin {
  pub id: Uuid,
  pub email: String,
  pub name: String,
  pub password_hash: String,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl SystemAdmin {
  pub fn new(email: String, name: String, password_hash: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      email,
      name,
      password_hash,
      is_active: true,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn from_db(
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      email,
      name,
      password_hash,
      is_active,
      created_at,
      updated_at,
    }
  }
}

/// Permission for an admin to reset their own password within a fixed window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetGrant {
  pub target_admin_id: Uuid,
  pub target_email: String,
  pub tenant_id: Uuid,
  pub allowed_by: Uuid,
  pub allowed_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}
