use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::create_invoice::InvoiceDto;
use crate::domain::invoice::{InvoiceError, InvoiceService, PaymentPeriod};

#[derive(Debug, Clone)]
pub struct ListInvoicesCommand {
  pub company_guid: Uuid,
  pub first_payment_date: DateTime<Utc>,
  pub last_payment_date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceDto>,
}

pub struct ListInvoicesUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: ListInvoicesCommand,
  ) -> Result<ListInvoicesResponse, InvoiceError> {
    let period = PaymentPeriod::new(command.first_payment_date, command.last_payment_date)?;

    let invoices = self
      .invoice_service
      .list_invoices(command.company_guid, period)
      .await?;

    Ok(ListInvoicesResponse {
      invoices: invoices.into_iter().map(InvoiceDto::from).collect(),
    })
  }
}
