use actix_web::{
  Error, HttpMessage,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  error::ResponseError,
  http::header::AUTHORIZATION,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  application::auth::{AuthenticateUserCommand, AuthenticateUserUseCase},
};

/// HTTP Basic authentication middleware
///
/// Decodes `Authorization: Basic base64(email:password)`, authenticates the
/// caller through `AuthenticateUserUseCase` and stores the resulting
/// `LoginInfo` in the request extensions. Requests without valid credentials
/// are answered with 401 and never reach the handler.
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use invoicer::application::auth::AuthenticateUserUseCase;
/// # use invoicer::adapters::http::middleware::auth::AuthMiddleware;
///
/// # async fn example(authenticate_use_case: Arc<AuthenticateUserUseCase>) {
/// let app = App::new().service(
///   web::scope("/api")
///     .wrap(AuthMiddleware::new(authenticate_use_case))
///     .route("/protected", web::get().to(|| async { "Protected endpoint" })),
/// );
/// # }
/// ```
pub struct AuthMiddleware {
  authenticate_use_case: Arc<AuthenticateUserUseCase>,
}

impl AuthMiddleware {
  pub fn new(authenticate_use_case: Arc<AuthenticateUserUseCase>) -> Self {
    Self {
      authenticate_use_case,
    }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      authenticate_use_case: self.authenticate_use_case.clone(),
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  authenticate_use_case: Arc<AuthenticateUserUseCase>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let authenticate_use_case = self.authenticate_use_case.clone();

    Box::pin(async move {
      let result = match extract_basic_credentials(&req) {
        Ok(command) => authenticate_use_case
          .execute(command)
          .await
          .map_err(ApiError::from),
        Err(e) => Err(e),
      };

      let login_info = match result {
        Ok(login_info) => login_info,
        Err(api_error) => {
          tracing::debug!(path = %req.path(), "Rejected request: {}", api_error);
          let (request, _) = req.into_parts();
          let response = api_error.error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      req.extensions_mut().insert(login_info);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Extract `email:password` from a Basic Authorization header
fn extract_basic_credentials(req: &ServiceRequest) -> Result<AuthenticateUserCommand, ApiError> {
  let missing = || ApiError::Auth(AuthErrorKind::MissingCredentials);

  let encoded = req
    .headers()
    .get(AUTHORIZATION)
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix("Basic "))
    .ok_or_else(missing)?;

  let decoded = STANDARD.decode(encoded.trim()).map_err(|_| missing())?;
  let decoded = String::from_utf8(decoded).map_err(|_| missing())?;
  let (email, password) = decoded.split_once(':').ok_or_else(missing)?;

  Ok(AuthenticateUserCommand {
    email: email.to_string(),
    password: password.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::{AuthService, LoginInfo};
  use crate::infrastructure::security::Argon2PasswordHasher;
  use crate::test_support::InMemoryUserRepository;
  use actix_web::{
    App, HttpRequest, HttpResponse,
    http::StatusCode,
    test::{self, TestRequest},
    web,
  };
  use uuid::Uuid;

  fn basic(credentials: &str) -> String {
    format!("Basic {}", STANDARD.encode(credentials))
  }

  #[test]
  fn test_extract_basic_credentials_valid() {
    let req = TestRequest::default()
      .insert_header(("Authorization", basic("owner@example.com:pa:ss:word")))
      .to_srv_request();

    let command = extract_basic_credentials(&req).unwrap();
    assert_eq!(command.email, "owner@example.com");
    assert_eq!(command.password, "pa:ss:word");
  }

  #[test]
  fn test_extract_basic_credentials_missing() {
    let req = TestRequest::default().to_srv_request();

    assert!(extract_basic_credentials(&req).is_err());
  }

  #[test]
  fn test_extract_basic_credentials_malformed() {
    for header in [
      "Bearer some_token".to_string(),
      "Basic %%%not-base64%%%".to_string(),
      basic("no-colon-here"),
    ] {
      let req = TestRequest::default()
        .insert_header(("Authorization", header))
        .to_srv_request();

      assert!(matches!(
        extract_basic_credentials(&req),
        Err(ApiError::Auth(AuthErrorKind::MissingCredentials))
      ));
    }
  }

  #[actix_web::test]
  async fn test_middleware_attaches_login_info() {
    let hasher = Arc::new(Argon2PasswordHasher::new().unwrap());
    let users = Arc::new(InMemoryUserRepository::new());
    let login = LoginInfo {
      user_guid: Uuid::new_v4(),
      company_guid: Uuid::new_v4(),
    };
    users
      .add_user(login, "owner@example.com", "correct-horse", hasher.as_ref())
      .await;
    let use_case = Arc::new(AuthenticateUserUseCase::new(Arc::new(AuthService::new(
      users, hasher,
    ))));

    async fn whoami(req: HttpRequest) -> HttpResponse {
      let login = req.extensions().get::<LoginInfo>().copied().unwrap();
      HttpResponse::Ok().body(login.company_guid.to_string())
    }

    let app = test::init_service(
      App::new()
        .wrap(AuthMiddleware::new(use_case))
        .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::get()
      .uri("/whoami")
      .insert_header(("Authorization", basic("owner@example.com:correct-horse")))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, login.company_guid.to_string());

    let req = TestRequest::get()
      .uri("/whoami")
      .insert_header(("Authorization", basic("owner@example.com:wrong-horse")))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key("www-authenticate"));

    let req = TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }
}
