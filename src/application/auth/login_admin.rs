use chrono::{DateTime, Utc};
use std::net::IpAddr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::Email;

/// Credentials for a tenant admin login
#[derive(Debug, Clone)]
pub struct LoginAdminCommand {
  pub email: String,
  pub password: String,
}

/// Response after successful tenant admin login
#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
  pub admin_id: Uuid,
  pub tenant_id: Uuid,
  pub email: String,
  /// Bearer token; only its hash is stored
  pub session_token: String,
  pub expires_at: DateTime<Utc>,
}

/// Use case for logging in a tenant admin
pub struct LoginAdminUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginAdminUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the tenant admin login
  ///
  /// # Arguments
  /// * `command` - The login credentials
  /// * `ip_address` - Optional IP address of the client
  /// * `user_agent` - Optional user agent string from the client
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or wrong password
  pub async fn execute(
    &self,
    command: LoginAdminCommand,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
  ) -> Result<LoginAdminResponse, AuthError> {
    let email = Email::new(command.email)?;
    let password = super::login_password(command.password)?;

    let (admin, session, session_token) = self
      .auth_service
      .login_admin(email, password, ip_address, user_agent)
      .await?;

    Ok(LoginAdminResponse {
      admin_id: admin.id,
      tenant_id: admin.tenant_id,
      email: admin.email,
      session_token: session_token.into_inner(),
      expires_at: session.expires_at,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::admin::{Admin, AdminRepository};
  use crate::domain::auth::{AuthServiceConfig, Password, PasswordHasher};
  use crate::infrastructure::persistence::memory::{
    InMemoryAdminRepository, InMemorySessionRepository, InMemorySystemAdminRepository,
  };
  use crate::infrastructure::security::Argon2PasswordHasher;

  async fn setup() -> (LoginAdminUseCase, Admin) {
    let admin_repo = Arc::new(InMemoryAdminRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::with_params(8, 1, 1).unwrap());
    let hash = hasher
      .hash(&Password::new("correct-horse").unwrap())
      .await
      .unwrap();
    let admin = admin_repo
      .create(Admin::new(
        Uuid::new_v4(),
        "manager@example.com".to_string(),
        "Manager".to_string(),
        hash.into_inner(),
      ))
      .await
      .unwrap();
    let auth_service = Arc::new(AuthService::new(
      admin_repo,
      Arc::new(InMemorySystemAdminRepository::new()),
      Arc::new(InMemorySessionRepository::new()),
      hasher,
      AuthServiceConfig::default(),
    ));
    (LoginAdminUseCase::new(auth_service), admin)
  }

  #[tokio::test]
  async fn test_login_returns_token_and_tenant() {
    let (use_case, admin) = setup().await;

    let response = use_case
      .execute(
        LoginAdminCommand {
          email: "Manager@Example.com".to_string(),
          password: "correct-horse".to_string(),
        },
        None,
        Some("test-agent".to_string()),
      )
      .await
      .unwrap();

    assert_eq!(response.admin_id, admin.id);
    assert_eq!(response.tenant_id, admin.tenant_id);
    assert_eq!(response.session_token.len(), 64);
    assert!(response.expires_at > Utc::now());
  }

  #[tokio::test]
  async fn test_malformed_email_is_a_value_error() {
    let (use_case, _) = setup().await;

    let result = use_case
      .execute(
        LoginAdminCommand {
          email: "not-an-email".to_string(),
          password: "correct-horse".to_string(),
        },
        None,
        None,
      )
      .await;

    assert!(matches!(result, Err(AuthError::ValueObject(_))));
  }
}
