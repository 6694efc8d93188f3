use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash};

/// Argon2id password hasher implementation
///
/// Production parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
///
/// Hashing runs on tokio's blocking pool so it never stalls an actix worker.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a hasher with the production parameters
  pub fn new() -> Result<Self, AuthError> {
    Self::with_params(19456, 2, 1)
  }

  /// Creates a hasher with explicit cost parameters (memory in KiB)
  pub fn with_params(
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
  ) -> Result<Self, AuthError> {
    let params = Params::new(memory_cost, time_cost, parallelism, Some(32)).map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();

    let hash = tokio::task::spawn_blocking(move || {
      let salt = SaltString::generate(&mut rand::rngs::OsRng);
      argon2
        .hash_password(password.as_str().as_bytes(), &salt)
        .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| HashError::HashingFailed(format!("Hashing task failed: {}", e)))?
    .map_err(|e| HashError::HashingFailed(format!("Failed to hash password: {}", e)))?;

    PasswordHash::from_hash(hash)
      .map_err(|e| AuthError::Hash(HashError::HashingFailed(format!("Invalid hash format: {}", e))))
  }

  /// Verifies a plain text password against a hashed password
  ///
  /// `Ok(false)` means the password does not match; `Err` means the stored hash is unusable.
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();
    let hashed_password = hashed_password.clone();

    tokio::task::spawn_blocking(move || -> Result<bool, HashError> {
      let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
        .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

      // Parameters are read from the PHC string, not from `argon2`
      match argon2.verify_password(password.as_str().as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HashError::VerificationFailed(format!(
          "Password verification failed: {}",
          e
        ))),
      }
    })
    .await
    .map_err(|e| HashError::VerificationFailed(format!("Verification task failed: {}", e)))?
    .map_err(AuthError::Hash)
  }
}
