use argon2::PasswordHash as Argon2PasswordHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Invalid email address: {0}")]
  InvalidEmail(String),

  #[error("Password must be 8 to 128 characters long")]
  InvalidPasswordLength,

  #[error("Not a PHC-formatted password hash")]
  InvalidPasswordHash,
}

/// Login email, trimmed and lowercased so lookups are case-insensitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  pub fn new(email: impl Into<String>) -> Result<Self, ValueObjectError> {
    let email = email.into().trim().to_lowercase();

    if !email.validate_email() {
      return Err(ValueObjectError::InvalidEmail(email));
    }

    Ok(Self(email))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Plain-text password as presented by the caller, never persisted
#[derive(Clone)]
pub struct Password(String);

impl Password {
  pub const MIN_LENGTH: usize = 8;
  pub const MAX_LENGTH: usize = 128;

  pub fn new(password: impl Into<String>) -> Result<Self, ValueObjectError> {
    let password = password.into();
    let length = password.chars().count();

    if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
      return Err(ValueObjectError::InvalidPasswordLength);
    }

    Ok(Self(password))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

/// Stored Argon2 hash in PHC string format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValueObjectError> {
    let hash = hash.into();
    Argon2PasswordHash::new(&hash).map_err(|_| ValueObjectError::InvalidPasswordHash)?;
    Ok(Self(hash))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}
