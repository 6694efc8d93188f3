//! Authentication use cases
//!
//! Logins for both kinds of administrator, session resolution for the
//! middleware, logout and grant-based password reset.

mod login_admin;
mod login_system_admin;
mod logout;
mod reset_admin_password;
mod resolve_session;

pub use login_admin::{LoginAdminCommand, LoginAdminResponse, LoginAdminUseCase};
pub use login_system_admin::{
  LoginSystemAdminCommand, LoginSystemAdminResponse, LoginSystemAdminUseCase,
};
pub use logout::LogoutUseCase;
pub use reset_admin_password::{
  ResetAdminPasswordCommand, ResetAdminPasswordResponse, ResetAdminPasswordUseCase,
};
pub use resolve_session::ResolveSessionUseCase;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::value_objects::{Password, ValueObjectError};

/// Parses a password submitted at login
///
/// Length policy applies to new passwords only; at login a password outside
/// it simply cannot match and is reported as bad credentials.
fn login_password(raw: String) -> Result<Password, AuthError> {
  Password::new(raw).map_err(|error| match error {
    ValueObjectError::PasswordTooShort | ValueObjectError::PasswordTooLong => {
      AuthError::InvalidCredentials
    }
    other => other.into(),
  })
}
