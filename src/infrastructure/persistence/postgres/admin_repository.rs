use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::admin::{Admin, AdminError, AdminRepository};
use crate::domain::auth::value_objects::Email;

#[derive(Debug, FromRow)]
struct AdminRow {
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
}

impl From<AdminRow> for Admin {
  fn from(row: AdminRow) -> Self {
    Admin::from_db(
      row.id,
      row.tenant_id,
      row.email,
      row.name,
      row.password_hash,
      row.password_reset_allowed_at,
      row.password_reset_expires_at,
      row.password_reset_allowed_by,
      row.created_at,
      row.updated_at,
    )
  }
}

/// PostgreSQL implementation of the AdminRepository trait
pub struct PostgresAdminRepository {
  pool: PgPool,
}

impl PostgresAdminRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
  async fn create(&self, admin: Admin) -> Result<Admin, AdminError> {
    let row = sqlx::query_as::<_, AdminRow>(
      r#"
            INSERT INTO admins (
                id,
                tenant_id,
                email,
                name,
                password_hash,
                password_reset_allowed_at,
                password_reset_expires_at,
                password_reset_allowed_by,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING
                id,
                tenant_id,
                email,
                name,
                password_hash,
                password_reset_allowed_at,
                password_reset_expires_at,
                password_reset_allowed_by,
                created_at,
                updated_at
            "#,
    )
    .bind(admin.id)
    .bind(admin.tenant_id)
    .bind(&admin.email)
    .bind(&admin.name)
    .bind(&admin.password_hash)
    .bind(admin.password_reset_allowed_at)
    .bind(admin.password_reset_expires_at)
    .bind(admin.password_reset_allowed_by)
    .bind(admin.created_at)
    .bind(admin.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminError> {
    let row = sqlx::query_as::<_, AdminRow>(
      r#"
            SELECT
                id,
                tenant_id,
                email,
                name,
                password_hash,
                password_reset_allowed_at,
                password_reset_expires_at,
                password_reset_allowed_by,
                created_at,
                updated_at
            FROM admins
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Admin::from))
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<Admin>, AdminError> {
    let row = sqlx::query_as::<_, AdminRow>(
      r#"
            SELECT
                id,
                tenant_id,
                email,
                name,
                password_hash,
                password_reset_allowed_at,
                password_reset_expires_at,
                password_reset_allowed_by,
                created_at,
                updated_at
            FROM admins
            WHERE LOWER(email) = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Admin::from))
  }

  async fn update(&self, admin: Admin) -> Result<Admin, AdminError> {
    let row = sqlx::query_as::<_, AdminRow>(
      r#"
            UPDATE admins
            SET
                email = $2,
                name = $3,
                password_hash = $4,
                password_reset_allowed_at = $5,
                password_reset_expires_at = $6,
                password_reset_allowed_by = $7,
                updated_at = $8
            WHERE id = $1
            RETURNING
                id,
                tenant_id,
                email,
                name,
                password_hash,
                password_reset_allowed_at,
                password_reset_expires_at,
                password_reset_allowed_by,
                created_at,
                updated_at
            "#,
    )
    .bind(admin.id)
    .bind(&admin.email)
    .bind(&admin.name)
    .bind(&admin.password_hash)
    .bind(admin.password_reset_allowed_at)
    .bind(admin.password_reset_expires_at)
    .bind(admin.password_reset_allowed_by)
    .bind(admin.updated_at)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Admin::from).ok_or(AdminError::NotFound)
  }
}
