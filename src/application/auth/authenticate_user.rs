use std::sync::Arc;

use crate::domain::auth::entities::LoginInfo;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command carrying the raw credentials presented by a caller
#[derive(Clone)]
pub struct AuthenticateUserCommand {
  pub email: String,
  pub password: String,
}

/// Use case resolving credentials to the caller's `LoginInfo`
pub struct AuthenticateUserUseCase {
  auth_service: Arc<AuthService>,
}

impl AuthenticateUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the authentication use case
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` when the email or password is
  /// malformed as well as when they do not match a stored user
  pub async fn execute(&self, command: AuthenticateUserCommand) -> Result<LoginInfo, AuthError> {
    let email = Email::new(command.email).map_err(|_| AuthError::InvalidCredentials)?;
    let password = Password::new(command.password).map_err(|_| AuthError::InvalidCredentials)?;

    self.auth_service.authenticate(email, password).await
  }
}
