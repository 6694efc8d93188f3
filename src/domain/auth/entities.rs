use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use uuid::Uuid;

use super::errors::RepositoryError;

/// The authenticated party behind a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
  /// Operator with cross-tenant privileges
  SystemAdmin { system_admin_id: Uuid },
  /// Administrator scoped to a single tenant
  TenantAdmin { admin_id: Uuid, tenant_id: Uuid },
}

impl Principal {
  pub fn as_str(&self) -> &'static str {
    match self {
      Principal::SystemAdmin { .. } => "system_admin",
      Principal::TenantAdmin { .. } => "tenant_admin",
    }
  }

  /// Identifier of the admin or system admin behind this principal
  pub fn subject_id(&self) -> Uuid {
    match self {
      Principal::SystemAdmin { system_admin_id } => *system_admin_id,
      Principal::TenantAdmin { admin_id, .. } => *admin_id,
    }
  }

  pub fn system_admin_id(&self) -> Option<Uuid> {
    match self {
      Principal::SystemAdmin { system_admin_id } => Some(*system_admin_id),
      Principal::TenantAdmin { .. } => None,
    }
  }

  pub fn tenant_id(&self) -> Option<Uuid> {
    match self {
      Principal::SystemAdmin { .. } => None,
      Principal::TenantAdmin { tenant_id, .. } => Some(*tenant_id),
    }
  }

  /// Rebuilds a principal from its stored columns
  pub fn from_db(
    kind: &str,
    subject_id: Uuid,
    tenant_id: Option<Uuid>,
  ) -> Result<Self, RepositoryError> {
    match (kind, tenant_id) {
      ("system_admin", None) => Ok(Principal::SystemAdmin {
        system_admin_id: subject_id,
      }),
      ("tenant_admin", Some(tenant_id)) => Ok(Principal::TenantAdmin {
        admin_id: subject_id,
        tenant_id,
      }),
      _ => Err(RepositoryError::QueryFailed(format!(
        "Inconsistent session principal: kind={}, tenant_id={:?}",
        kind, tenant_id
      ))),
    }
  }
}

/// Session entity representing a logged-in principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  /// Unique identifier for the session
  pub id: Uuid,
  /// Who the session belongs to
  pub principal: Principal,
  /// SHA-256 hex digest of the bearer token
  pub token_hash: String,
  /// IP address from which the session was created
  pub ip_address: Option<IpAddr>,
  /// User agent string from the client
  pub user_agent: Option<String>,
  /// Timestamp when the session expires
  pub expires_at: DateTime<Utc>,
  /// Timestamp when the session was created
  pub created_at: DateTime<Utc>,
  /// Timestamp of the last authenticated request
  pub last_activity_at: DateTime<Utc>,
}

impl Session {
  /// Creates a session that expires after `duration`
  pub fn with_duration(
    principal: Principal,
    token_hash: String,
    duration: Duration,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      principal,
      token_hash,
      ip_address,
      user_agent,
      expires_at: now + duration,
      created_at: now,
      last_activity_at: now,
    }
  }

  /// Creates a session from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    principal: Principal,
    token_hash: String,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      principal,
      token_hash,
      ip_address,
      user_agent,
      expires_at,
      created_at,
      last_activity_at,
    }
  }

  /// Checks if the session has expired
  pub fn is_expired(&self) -> bool {
    self.expires_at <= Utc::now()
  }
}
