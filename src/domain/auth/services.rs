use std::sync::Arc;

use super::entities::LoginInfo;
use super::errors::AuthError;
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password};

/// Authentication service checking caller credentials against stored users
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
    }
  }

  /// Authenticates a user by email and password
  ///
  /// # Returns
  /// The `LoginInfo` of the user and their company
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or a wrong
  /// password, so callers cannot tell which of the two was wrong
  pub async fn authenticate(
    &self,
    email: Email,
    password: Password,
  ) -> Result<LoginInfo, AuthError> {
    let credentials = match self.user_repo.find_credentials_by_email(&email).await? {
      Some(credentials) => credentials,
      None => {
        tracing::debug!(email = %email, "Authentication failed: unknown email");
        return Err(AuthError::InvalidCredentials);
      }
    };

    let is_valid = self
      .password_hasher
      .verify(&password, &credentials.password_hash)
      .await?;

    if !is_valid {
      tracing::debug!(email = %email, "Authentication failed: wrong password");
      return Err(AuthError::InvalidCredentials);
    }

    Ok(credentials.login_info())
  }
}
