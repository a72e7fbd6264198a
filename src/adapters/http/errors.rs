use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::AuthError;
use crate::domain::invoice::InvoiceError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Referenced record does not exist (404 Not Found)
  NotFound(String),

  /// Authentication error (401 Unauthorized)
  Auth(AuthErrorKind),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug)]
pub enum AuthErrorKind {
  /// No or malformed Authorization header
  MissingCredentials,

  /// Credentials do not match a user
  InvalidCredentials,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::Auth(AuthErrorKind::MissingCredentials) => (
        "missing_credentials",
        "Missing or malformed authorization header".to_string(),
      ),
      ApiError::Auth(AuthErrorKind::InvalidCredentials) => (
        "invalid_credentials",
        "Invalid email or password".to_string(),
      ),
      ApiError::Internal(msg) => {
        // Details stay in the log
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    let mut response = HttpResponse::build(status);
    if matches!(self, ApiError::Auth(_)) {
      response.insert_header(("WWW-Authenticate", "Basic realm=\"invoicer\""));
    }

    response
      .content_type(ContentType::json())
      .json(error_response)
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Validation(err) => ApiError::Validation(err.to_string()),
      InvoiceError::CompanyMismatch { .. } => ApiError::Validation(error.to_string()),
      InvoiceError::CustomerNotFound(_) | InvoiceError::CompanyNotFound(_) => {
        ApiError::NotFound(error.to_string())
      }
      InvoiceError::UnknownStatus(_) | InvoiceError::Database(_) | InvoiceError::Internal(_) => {
        ApiError::Internal(error.to_string())
      }
    }
  }
}

impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AuthError::Repository(_) | AuthError::Hash(_) | AuthError::ValueObject(_) => {
        ApiError::Internal(error.to_string())
      }
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}
