use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::net::IpAddr;
use uuid::Uuid;

use crate::domain::auth::entities::{Principal, Session};
use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::auth::ports::SessionRepository;

/// Database row structure for sessions table
#[derive(Debug, FromRow)]
struct SessionRow {
  id: Uuid,
  principal_kind: String,
  principal_id: Uuid,
  tenant_id: Option<Uuid>,
  token_hash: String,
  ip_address: Option<String>,
  user_agent: Option<String>,
  expires_at: DateTime<Utc>,
  created_at: DateTime<Utc>,
  last_activity_at: DateTime<Utc>,
}

impl TryFrom<SessionRow> for Session {
  type Error = AuthError;

  fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
    let principal = Principal::from_db(&row.principal_kind, row.principal_id, row.tenant_id)?;
    let ip_address = row
      .ip_address
      .and_then(|ip_str| ip_str.parse::<IpAddr>().ok());

    Ok(Session::from_db(
      row.id,
      principal,
      row.token_hash,
      ip_address,
      row.user_agent,
      row.expires_at,
      row.created_at,
      row.last_activity_at,
    ))
  }
}

/// PostgreSQL implementation of the SessionRepository trait
pub struct PostgresSessionRepository {
  pool: PgPool,
}

impl PostgresSessionRepository {
  /// Creates a new PostgresSessionRepository with the given connection pool
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
  async fn create(&self, session: Session) -> Result<Session, AuthError> {
    let ip_address = session.ip_address.map(|ip| ip.to_string());

    let row = sqlx::query_as::<_, SessionRow>(
      r#"
            INSERT INTO sessions (id, principal_kind, principal_id, tenant_id, token_hash, ip_address, user_agent, expires_at, created_at, last_activity_at)
            VALUES ($1, $2, $3, $4, $5, CAST($6 AS INET), $7, $8, $9, $10)
            RETURNING id, principal_kind, principal_id, tenant_id, token_hash, HOST(ip_address) AS ip_address, user_agent, expires_at, created_at, last_activity_at
            "#,
    )
    .bind(session.id)
    .bind(session.principal.as_str())
    .bind(session.principal.subject_id())
    .bind(session.principal.tenant_id())
    .bind(&session.token_hash)
    .bind(ip_address.as_deref())
    .bind(session.user_agent.as_deref())
    .bind(session.expires_at)
    .bind(session.created_at)
    .bind(session.last_activity_at)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to create session: {}", e);
      AuthError::Repository(RepositoryError::from(e))
    })?;

    row.try_into()
  }

  async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AuthError> {
    let row = sqlx::query_as::<_, SessionRow>(
      r#"
            SELECT id, principal_kind, principal_id, tenant_id, token_hash, HOST(ip_address) AS ip_address, user_agent, expires_at, created_at, last_activity_at
            FROM sessions
            WHERE token_hash = $1
            "#,
    )
    .bind(token_hash)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to find session by token hash: {}", e);
      AuthError::Repository(RepositoryError::from(e))
    })?;

    row.map(Session::try_from).transpose()
  }

  async fn update_activity(&self, session_id: Uuid) -> Result<(), AuthError> {
    let result = sqlx::query(
      r#"
            UPDATE sessions
            SET last_activity_at = NOW()
            WHERE id = $1
            "#,
    )
    .bind(session_id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      tracing::warn!("Session {} not found for activity update", session_id);
      return Err(AuthError::Repository(RepositoryError::NotFound));
    }

    Ok(())
  }

  async fn delete(&self, session_id: Uuid) -> Result<(), AuthError> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
      .bind(session_id)
      .execute(&self.pool)
      .await?;

    Ok(())
  }

  async fn delete_all_for_principal(&self, principal: &Principal) -> Result<u64, AuthError> {
    let result = sqlx::query(
      r#"
            DELETE FROM sessions
            WHERE principal_kind = $1 AND principal_id = $2
            "#,
    )
    .bind(principal.as_str())
    .bind(principal.subject_id())
    .execute(&self.pool)
    .await?;

    Ok(result.rows_affected())
  }
}
