use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

#[derive(Debug, Clone)]
pub struct ResetAdminPasswordCommand {
  pub email: String,
  pub new_password: String,
}

#[derive(Debug, Clone)]
pub struct ResetAdminPasswordResponse {
  /// Sessions closed because the password changed
  pub revoked_sessions: u64,
}

/// Use case for consuming a password reset grant
pub struct ResetAdminPasswordUseCase {
  auth_service: Arc<AuthService>,
}

impl ResetAdminPasswordUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// - `AuthError::ValueObject` if the email or new password is malformed
  /// - `AuthError::PasswordResetNotAllowed` if no open grant exists for the email
  pub async fn execute(
    &self,
    command: ResetAdminPasswordCommand,
  ) -> Result<ResetAdminPasswordResponse, AuthError> {
    let email = Email::new(command.email)?;
    let new_password = Password::new(command.new_password)?;

    let revoked_sessions = self
      .auth_service
      .reset_admin_password(email, new_password)
      .await?;

    Ok(ResetAdminPasswordResponse { revoked_sessions })
  }
}
