use thiserror::Error;

use super::value_objects::ValueObjectError;

#[derive(Debug, Error)]
pub enum AuthError {
  /// Unknown email, wrong password or malformed credentials
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("User store error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Password hash error: {0}")]
  Hash(#[from] HashError),

  /// A stored value failed to parse
  #[error("Corrupt stored credentials: {0}")]
  ValueObject(#[from] ValueObjectError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("User store unavailable: {0}")]
  Unavailable(String),

  #[error("User lookup failed: {0}")]
  Query(String),
}

#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
        RepositoryError::Unavailable(error.to_string())
      }
      _ => RepositoryError::Query(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    AuthError::Repository(RepositoryError::from(error))
  }
}
