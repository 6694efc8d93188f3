use chrono::{DateTime, Utc};
use std::net::IpAddr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::Email;

#[derive(Debug, Clone)]
pub struct LoginSystemAdminCommand {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginSystemAdminResponse {
  pub system_admin_id: Uuid,
  pub email: String,
  pub session_token: String,
  pub expires_at: DateTime<Utc>,
}

/// Use case for logging in a system admin
pub struct LoginSystemAdminUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginSystemAdminUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email, wrong password or disabled account
  pub async fn execute(
    &self,
    command: LoginSystemAdminCommand,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
  ) -> Result<LoginSystemAdminResponse, AuthError> {
    let email = Email::new(command.email)?;
    let password = super::login_password(command.password)?;

    let (system_admin, session, session_token) = self
      .auth_service
      .login_system_admin(email, password, ip_address, user_agent)
      .await?;

    Ok(LoginSystemAdminResponse {
      system_admin_id: system_admin.id,
      email: system_admin.email,
      session_token: session_token.into_inner(),
      expires_at: session.expires_at,
    })
  }
}
