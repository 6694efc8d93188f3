use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::admin::{AdminError, SystemAdmin, SystemAdminRepository};
use crate::domain::auth::value_objects::Email;

#[derive(Debug, FromRow)]
struct SystemAdminRow {
  id: Uuid,
  email: String,
  name: String,
  password_hash: String,
  is_active: bool,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<SystemAdminRow> for SystemAdmin {
  fn from(row: SystemAdminRow) -> Self {
    SystemAdmin::from_db(
      row.id,
      row.email,
      row.name,
      row.password_hash,
      row.is_active,
      row.created_at,
      row.updated_at,
    )
  }
}

pub struct PostgresSystemAdminRepository {
  pool: PgPool,
}

impl PostgresSystemAdminRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl SystemAdminRepository for PostgresSystemAdminRepository {
  async fn create(&self, system_admin: SystemAdmin) -> Result<SystemAdmin, AdminError> {
    let row = sqlx::query_as::<_, SystemAdminRow>(
      r#"
            INSERT INTO system_admins (id, email, name, password_hash, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, email, name, password_hash, is_active, created_at, updated_at
            "#,
    )
    .bind(system_admin.id)
    .bind(&system_admin.email)
    .bind(&system_admin.name)
    .bind(&system_admin.password_hash)
    .bind(system_admin.is_active)
    .bind(system_admin.created_at)
    .bind(system_admin.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemAdmin>, AdminError> {
    let row = sqlx::query_as::<_, SystemAdminRow>(
      r#"
            SELECT id, email, name, password_hash, is_active, created_at, updated_at
            FROM system_admins
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(SystemAdmin::from))
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<SystemAdmin>, AdminError> {
    let row = sqlx::query_as::<_, SystemAdminRow>(
      r#"
            SELECT id, email, name, password_hash, is_active, created_at, updated_at
            FROM system_admins
            WHERE LOWER(email) = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(SystemAdmin::from))
  }
}
