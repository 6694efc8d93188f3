use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::tenant::{Tenant, TenantError, TenantRepository};

#[derive(Debug, FromRow)]
struct TenantRow {
  id: Uuid,
  name: String,
  timezone: String,
  is_active: bool,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<TenantRow> for Tenant {
  fn from(row: TenantRow) -> Self {
    Tenant::from_db(
      row.id,
      row.name,
      row.timezone,
      row.is_active,
      row.created_at,
      row.updated_at,
    )
  }
}

pub struct PostgresTenantRepository {
  pool: PgPool,
}

impl PostgresTenantRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl TenantRepository for PostgresTenantRepository {
  async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    let row = sqlx::query_as::<_, TenantRow>(
      r#"
            INSERT INTO tenants (id, name, timezone, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, timezone, is_active, created_at, updated_at
            "#,
    )
    .bind(tenant.id)
    .bind(&tenant.name)
    .bind(&tenant.timezone)
    .bind(tenant.is_active)
    .bind(tenant.created_at)
    .bind(tenant.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, TenantError> {
    let row = sqlx::query_as::<_, TenantRow>(
      r#"
            SELECT id, name, timezone, is_active, created_at, updated_at
            FROM tenants
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Tenant::from))
  }

  async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    let row = sqlx::query_as::<_, TenantRow>(
      r#"
            UPDATE tenants
            SET name = $2, timezone = $3, is_active = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, name, timezone, is_active, created_at, updated_at
            "#,
    )
    .bind(tenant.id)
    .bind(&tenant.name)
    .bind(&tenant.timezone)
    .bind(tenant.is_active)
    .bind(tenant.updated_at)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Tenant::from).ok_or(TenantError::NotFound)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::tenant::TenantName;
  use crate::infrastructure::persistence::postgres::test_support::setup_test_db;

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_create_and_find_tenant() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresTenantRepository::new(pool);

    let tenant = Tenant::new(TenantName::new("Izakaya Hana").unwrap(), "Asia/Tokyo");
    let created = repo.create(tenant.clone()).await.unwrap();
    assert_eq!(created.id, tenant.id);

    let found = repo.find_by_id(tenant.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Izakaya Hana");
    assert_eq!(found.timezone, "Asia/Tokyo");
    assert!(found.is_active);

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
  }

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_update_tenant() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresTenantRepository::new(pool);

    let mut tenant = repo
      .create(Tenant::new(TenantName::new("Izakaya Hana").unwrap(), "Asia/Tokyo"))
      .await
      .unwrap();
    tenant.rename(TenantName::new("Izakaya Tsuki").unwrap());

    let updated = repo.update(tenant.clone()).await.unwrap();
    assert_eq!(updated.name, "Izakaya Tsuki");
    assert_eq!(updated.timezone, "Asia/Tokyo");
  }

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_update_missing_tenant() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresTenantRepository::new(pool);

    let ghost = Tenant::new(TenantName::new("Ghost").unwrap(), "UTC");
    let result = repo.update(ghost).await;

    assert!(matches!(result, Err(TenantError::NotFound)));
  }
}
