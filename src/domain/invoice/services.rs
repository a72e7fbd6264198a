use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Invoice, NewInvoice};
use super::errors::InvoiceError;
use super::ports::{GuidGenerator, InvoiceRepository};
use super::value_objects::PaymentPeriod;

pub struct InvoiceService {
  invoice_repo: Arc<dyn InvoiceRepository>,
  guid_generator: Arc<dyn GuidGenerator>,
}

impl InvoiceService {
  pub fn new(
    invoice_repo: Arc<dyn InvoiceRepository>,
    guid_generator: Arc<dyn GuidGenerator>,
  ) -> Self {
    Self {
      invoice_repo,
      guid_generator,
    }
  }

  pub async fn create_invoice(&self, data: NewInvoice) -> Result<Invoice, InvoiceError> {
    let invoice = Invoice::issue(self.guid_generator.generate(), data)?;

    tracing::debug!(
      invoice_guid = %invoice.guid,
      company_guid = %invoice.company_guid,
      billing_amount = invoice.billing_amount.value(),
      "Issuing invoice"
    );

    let invoice = self.invoice_repo.create(invoice).await?;

    tracing::info!(invoice_guid = %invoice.guid, "Invoice created");
    Ok(invoice)
  }

  pub async fn list_invoices(
    &self,
    company_guid: Uuid,
    period: PaymentPeriod,
  ) -> Result<Vec<Invoice>, InvoiceError> {
    let invoices = self.invoice_repo.list(company_guid, period).await?;

    tracing::debug!(
      company_guid = %company_guid,
      count = invoices.len(),
      "Listed invoices"
    );

    Ok(invoices)
  }
}
