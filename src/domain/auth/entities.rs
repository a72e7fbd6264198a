use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Email, PasswordHash};

/// Identity of an authenticated caller, attached to each request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInfo {
  /// GUID of the authenticated user
  pub user_guid: Uuid,
  /// GUID of the company the user belongs to
  pub company_guid: Uuid,
}

/// Stored user credentials joined with the owning company
#[derive(Debug, Clone)]
pub struct UserCredentials {
  pub guid: Uuid,
  pub company_guid: Uuid,
  pub email: Email,
  pub password_hash: PasswordHash,
}

impl UserCredentials {
  pub fn login_info(&self) -> LoginInfo {
    LoginInfo {
      user_guid: self.guid,
      company_guid: self.company_guid,
    }
  }
}
