use thiserror::Error;

use crate::domain::auth::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum TenantError {
  #[error("Tenant not found")]
  NotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Tenant name must not be empty")]
  TenantNameEmpty,

  #[error("Tenant name must be at most {max} characters")]
  TenantNameTooLong { max: usize },
}

impl From<sqlx::Error> for TenantError {
  fn from(error: sqlx::Error) -> Self {
    TenantError::Repository(RepositoryError::from(error))
  }
}
