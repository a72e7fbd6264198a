use async_trait::async_trait;

use super::entities::UserCredentials;
use super::errors::AuthError;
use super::value_objects::{Email, Password, PasswordHash};

/// Repository trait for user credential lookups
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Finds a user's credentials, together with their company, by email address
  async fn find_credentials_by_email(
    &self,
    email: &Email,
  ) -> Result<Option<UserCredentials>, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError>;
}
