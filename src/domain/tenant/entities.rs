use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::TenantName;

/// Default IANA timezone for newly created tenants
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Tenant entity representing an isolated customer organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
  pub id: Uuid,
  pub name: String,
  /// IANA timezone name used to interpret shift times
  pub timezone: String,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Tenant {
  /// Create new tenant (for creation)
  pub fn new(name: TenantName, timezone: impl Into<String>) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name: name.into_inner(),
      timezone: timezone.into(),
      is_active: true,
      created_at: now,
      updated_at: now,
    }
  }

  /// Reconstruct from database
  pub fn from_db(
    id: Uuid,
    name: String,
    timezone: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      timezone,
      is_active,
      created_at,
      updated_at,
    }
  }

  /// Update tenant display name
  pub fn rename(&mut self, name: TenantName) {
    self.name = name.into_inner();
    self.updated_at = Utc::now();
  }
}
