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

// Argon2id parameters: 19 MiB memory, 2 iterations, 1 lane
const MEMORY_COST_KIB: u32 = 19456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

/// Argon2id password hasher
///
/// Hashing and verification are CPU bound, so both run on the blocking pool
/// instead of stalling the request worker.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  pub fn new() -> Result<Self, AuthError> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
      .map_err(|e| {
        AuthError::Hash(HashError::HashingFailed(format!(
          "Failed to create Argon2 params: {}",
          e
        )))
      })?;

    Ok(Self {
      argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
    })
  }

  fn hash_blocking(argon2: &Argon2<'static>, password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);
    argon2
      .hash_password(password.as_bytes(), &salt)
      .map(|hash| hash.to_string())
      .map_err(|e| HashError::HashingFailed(e.to_string()))
  }

  fn verify_blocking(
    argon2: &Argon2<'static>,
    password: &str,
    hash: &str,
  ) -> Result<bool, HashError> {
    let parsed_hash = Argon2PasswordHash::new(hash)
      .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
      Ok(()) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(HashError::VerificationFailed(e.to_string())),
    }
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.as_str().to_string();

    let hash = tokio::task::spawn_blocking(move || Self::hash_blocking(&argon2, &password))
      .await
      .map_err(|e| HashError::HashingFailed(e.to_string()))??;

    PasswordHash::from_hash(hash).map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Invalid hash format: {}",
        e
      )))
    })
  }

  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.as_str().to_string();
    let hash = hashed_password.as_str().to_string();

    tokio::task::spawn_blocking(move || Self::verify_blocking(&argon2, &password, &hash))
      .await
      .map_err(|e| HashError::VerificationFailed(e.to_string()))?
      .map_err(AuthError::from)
  }
}
