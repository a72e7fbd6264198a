use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::application::invoice::{CreateInvoiceUseCase, ListInvoicesUseCase};

use super::errors::ApiError;
use super::handlers::invoices::{create_invoice_handler, list_invoices_handler};

/// JSON extractor settings: malformed or ill-typed bodies become validation errors
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    ApiError::Validation(format!("Invalid request body: {}", err)).into()
  })
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err, _req| {
    ApiError::Validation(format!("Invalid query string: {}", err)).into()
  })
}

/// Configure invoice routes
///
/// Mounts the invoice endpoints at the root of the provided scope, which is
/// expected to be wrapped in `AuthMiddleware`.
///
/// # Routes
///
/// - POST / - Issue an invoice for the caller's company
/// - GET / - List invoices by payment-date range
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use invoicer::application::auth::AuthenticateUserUseCase;
/// # use invoicer::application::invoice::{CreateInvoiceUseCase, ListInvoicesUseCase};
/// # use invoicer::adapters::http::{AuthMiddleware, configure_invoice_routes};
///
/// # async fn example(
/// #   authenticate_use_case: Arc<AuthenticateUserUseCase>,
/// #   create_invoice_use_case: Arc<CreateInvoiceUseCase>,
/// #   list_invoices_use_case: Arc<ListInvoicesUseCase>,
/// # ) {
/// let app = App::new().service(
///   web::scope("/api/invoices")
///     .wrap(AuthMiddleware::new(authenticate_use_case))
///     .configure(|cfg| {
///       configure_invoice_routes(cfg, create_invoice_use_case, list_invoices_use_case)
///     }),
/// );
/// # }
/// ```
pub fn configure_invoice_routes(
  cfg: &mut web::ServiceConfig,
  create_invoice_use_case: Arc<CreateInvoiceUseCase>,
  list_invoices_use_case: Arc<ListInvoicesUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_invoice_use_case))
    .app_data(web::Data::new(list_invoices_use_case))
    .app_data(json_config())
    .app_data(query_config())
    .service(
      web::resource("")
        .route(web::post().to(create_invoice_handler))
        .route(web::get().to(list_invoices_handler)),
    );
}

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
  HttpResponse::Ok().body("OK")
}
