use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use super::get_login_info;
use crate::{
  adapters::http::{
    dtos::{CreateInvoiceRequest, InvoiceResponse, ListInvoicesQuery, ListInvoicesResponse},
    errors::ApiError,
    middleware::RequestIdExt,
  },
  application::invoice::{CreateInvoiceUseCase, ListInvoicesUseCase},
};

/// Issue a new invoice for the caller's company
/// POST /api/invoices
pub async fn create_invoice_handler(
  request: web::Json<CreateInvoiceRequest>,
  use_case: web::Data<Arc<CreateInvoiceUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let login = get_login_info(&http_req)?;
  let request = request.into_inner();

  if request.company_guid != login.company_guid {
    tracing::warn!(
      request_id = ?http_req.request_id().map(|id| id.value()),
      user_guid = %login.user_guid,
      company_guid = %request.company_guid,
      "Attempt to issue an invoice for another company"
    );
    return Err(ApiError::Validation(
      "company_guid does not match the authenticated company".to_string(),
    ));
  }

  let invoice = use_case.execute(request.into()).await?;

  Ok(HttpResponse::Created().json(InvoiceResponse::from(invoice)))
}

/// List the caller's invoices due within a payment-date range
/// GET /api/invoices?first_payment_date=..&last_payment_date=..
pub async fn list_invoices_handler(
  query: web::Query<ListInvoicesQuery>,
  use_case: web::Data<Arc<ListInvoicesUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let login = get_login_info(&http_req)?;

  let response = use_case
    .execute(query.into_inner().into_command(login.company_guid))
    .await?;

  Ok(HttpResponse::Ok().json(ListInvoicesResponse {
    invoices: response
      .invoices
      .into_iter()
      .map(InvoiceResponse::from)
      .collect(),
  }))
}
