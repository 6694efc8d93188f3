use chrono::{Duration, Utc};
use std::net::IpAddr;
use std::sync::Arc;

use super::{
  entities::{Principal, Session},
  errors::{AuthError, HashError, RepositoryError},
  ports::{PasswordHasher, SessionRepository},
  value_objects::{Email, Password, PasswordHash, SessionToken},
};
use crate::domain::admin::{Admin, AdminRepository, SystemAdmin, SystemAdminRepository};

/// Configuration for AuthService
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
  pub session_ttl_seconds: i64,
}

impl Default for AuthServiceConfig {
  fn default() -> Self {
    Self {
      session_ttl_seconds: 8 * 60 * 60,
    }
  }
}

/// Authentication service handling logins, sessions and password resets
pub struct AuthService {
  admin_repo: Arc<dyn AdminRepository>,
  system_admin_repo: Arc<dyn SystemAdminRepository>,
  session_repo: Arc<dyn SessionRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  config: AuthServiceConfig,
}

impl AuthService {
  pub fn new(
    admin_repo: Arc<dyn AdminRepository>,
    system_admin_repo: Arc<dyn SystemAdminRepository>,
    session_repo: Arc<dyn SessionRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    config: AuthServiceConfig,
  ) -> Self {
    Self {
      admin_repo,
      system_admin_repo,
      session_repo,
      password_hasher,
      config,
    }
  }

  /// Authenticates a tenant admin and opens a session
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or wrong password
  pub async fn login_admin(
    &self,
    email: Email,
    password: Password,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
  ) -> Result<(Admin, Session, SessionToken), AuthError> {
    let admin = self
      .admin_repo
      .find_by_email(&email)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    self.verify_password(&password, &admin.password_hash).await?;

    let principal = Principal::TenantAdmin {
      admin_id: admin.id,
      tenant_id: admin.tenant_id,
    };
    let (session, token) = self.open_session(principal, ip_address, user_agent).await?;

    tracing::info!(admin_id = %admin.id, tenant_id = %admin.tenant_id, "Admin logged in");

    Ok((admin, session, token))
  }

  /// Authenticates a system admin and opens a session
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email, wrong password or inactive account
  pub async fn login_system_admin(
    &self,
    email: Email,
    password: Password,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
  ) -> Result<(SystemAdmin, Session, SessionToken), AuthError> {
    let system_admin = self
      .system_admin_repo
      .find_by_email(&email)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    self
      .verify_password(&password, &system_admin.password_hash)
      .await?;

    if !system_admin.is_active {
      return Err(AuthError::InvalidCredentials);
    }

    let principal = Principal::SystemAdmin {
      system_admin_id: system_admin.id,
    };
    let (session, token) = self.open_session(principal, ip_address, user_agent).await?;

    tracing::info!(system_admin_id = %system_admin.id, "System admin logged in");

    Ok((system_admin, session, token))
  }

  /// Logs out by invalidating the session behind `token`
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` if session not found
  pub async fn logout(&self, token: SessionToken) -> Result<(), AuthError> {
    let token_hash = token.hash();

    let session = self
      .session_repo
      .find_by_token_hash(token_hash.as_str())
      .await?
      .ok_or(AuthError::InvalidSession)?;

    self.session_repo.delete(session.id).await?;

    Ok(())
  }

  /// Validates a session token and returns the principal behind it
  ///
  /// Expired sessions are deleted. Sessions whose account disappeared or was
  /// deactivated are rejected.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` if session is invalid or expired
  pub async fn validate_session(&self, token: SessionToken) -> Result<Principal, AuthError> {
    let token_hash = token.hash();

    let session = self
      .session_repo
      .find_by_token_hash(token_hash.as_str())
      .await?
      .ok_or(AuthError::InvalidSession)?;

    if session.is_expired() {
      self.session_repo.delete(session.id).await?;
      return Err(AuthError::InvalidSession);
    }

    let still_valid = match session.principal {
      Principal::SystemAdmin { system_admin_id } => self
        .system_admin_repo
        .find_by_id(system_admin_id)
        .await?
        .is_some_and(|system_admin| system_admin.is_active),
      Principal::TenantAdmin { admin_id, .. } => {
        self.admin_repo.find_by_id(admin_id).await?.is_some()
      }
    };

    if !still_valid {
      tracing::warn!(
        session_id = %session.id,
        principal = session.principal.as_str(),
        "Session refers to a missing or inactive account"
      );
      return Err(AuthError::InvalidSession);
    }

    match self.session_repo.update_activity(session.id).await {
      Ok(()) => Ok(session.principal),
      // Logged out between the lookup and the bump
      Err(AuthError::Repository(RepositoryError::NotFound)) => Err(AuthError::InvalidSession),
      Err(error) => Err(error),
    }
  }

  /// Sets a new password for an admin holding an open reset grant
  ///
  /// The grant is consumed and every session of the admin is revoked.
  /// Returns the number of revoked sessions.
  ///
  /// # Errors
  /// Returns `AuthError::PasswordResetNotAllowed` if the email is unknown or no grant is open
  pub async fn reset_admin_password(
    &self,
    email: Email,
    new_password: Password,
  ) -> Result<u64, AuthError> {
    let mut admin = self
      .admin_repo
      .find_by_email(&email)
      .await?
      .ok_or(AuthError::PasswordResetNotAllowed)?;

    if !admin.can_reset_password_at(Utc::now()) {
      tracing::warn!(admin_id = %admin.id, "Password reset attempted without an open grant");
      return Err(AuthError::PasswordResetNotAllowed);
    }

    let new_hash = self.password_hasher.hash(&new_password).await?;
    admin.complete_password_reset(new_hash.into_inner());
    let admin = self.admin_repo.update(admin).await?;

    let principal = Principal::TenantAdmin {
      admin_id: admin.id,
      tenant_id: admin.tenant_id,
    };
    let revoked = self.session_repo.delete_all_for_principal(&principal).await?;

    tracing::info!(
      admin_id = %admin.id,
      revoked_sessions = revoked,
      "Admin password reset completed"
    );

    Ok(revoked)
  }

  async fn verify_password(&self, password: &Password, stored_hash: &str) -> Result<(), AuthError> {
    let hash = PasswordHash::from_hash(stored_hash).map_err(|_| HashError::InvalidFormat)?;

    if self.password_hasher.verify(password, &hash).await? {
      Ok(())
    } else {
      Err(AuthError::InvalidCredentials)
    }
  }

  async fn open_session(
    &self,
    principal: Principal,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
  ) -> Result<(Session, SessionToken), AuthError> {
    let token = SessionToken::generate();
    let session = Session::with_duration(
      principal,
      token.hash().into_inner(),
      Duration::seconds(self.config.session_ttl_seconds),
      ip_address,
      user_agent,
    );

    let created = self.session_repo.create(session).await?;

    Ok((created, token))
  }
}
