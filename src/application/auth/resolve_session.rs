use std::sync::Arc;

use crate::domain::auth::entities::Principal;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// Use case for turning a bearer token into the principal behind it
pub struct ResolveSessionUseCase {
  auth_service: Arc<AuthService>,
}

impl ResolveSessionUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the session lookup
  ///
  /// # Errors
  /// Returns `AuthError` if the token is malformed, unknown or expired
  pub async fn execute(&self, session_token: String) -> Result<Principal, AuthError> {
    let token = SessionToken::from_string(session_token)?;

    self.auth_service.validate_session(token).await
  }
}
