pub mod invoices;

use actix_web::{HttpMessage, HttpRequest};

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  domain::auth::entities::LoginInfo,
};

/// Extract the authenticated caller from request extensions
pub fn get_login_info(req: &HttpRequest) -> Result<LoginInfo, ApiError> {
  let login_info = req.extensions().get::<LoginInfo>().copied();

  if login_info.is_none() {
    tracing::warn!(
      "get_login_info: LoginInfo not found in request extensions for path {}",
      req.path()
    );
  }

  login_info.ok_or(ApiError::Auth(AuthErrorKind::MissingCredentials))
}
