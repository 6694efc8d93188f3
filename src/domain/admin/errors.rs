use thiserror::Error;

use crate::domain::auth::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum AdminError {
  #[error("Admin not found")]
  NotFound,

  #[error("System admin not found")]
  SystemAdminNotFound,

  #[error("System admin account is inactive")]
  SystemAdminInactive,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for AdminError {
  fn from(error: sqlx::Error) -> Self {
    AdminError::Repository(RepositoryError::from(error))
  }
}
