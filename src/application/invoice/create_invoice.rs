use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Amount, Invoice, InvoiceError, InvoiceService, NewInvoice, TaxRate};

#[derive(Debug, Clone)]
pub struct CreateInvoiceCommand {
  pub company_guid: Uuid,
  pub customer_guid: Uuid,
  pub publish_date: DateTime<Utc>,
  pub payment: i64,
  pub commission_tax_rate: Decimal,
  pub tax_rate: Decimal,
  pub payment_date: DateTime<Utc>,
}

/// Flat view of an invoice handed to the outer layers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDto {
  pub guid: Uuid,
  pub company_guid: Uuid,
  pub customer_guid: Uuid,
  pub publish_date: DateTime<Utc>,
  pub payment: i64,
  pub commission_tax: i64,
  pub commission_tax_rate: Decimal,
  pub consumption_tax: i64,
  pub tax_rate: Decimal,
  pub billing_amount: i64,
  pub payment_date: DateTime<Utc>,
  pub status: String,
}

impl From<Invoice> for InvoiceDto {
  fn from(invoice: Invoice) -> Self {
    Self {
      guid: invoice.guid,
      company_guid: invoice.company_guid,
      customer_guid: invoice.customer_guid,
      publish_date: invoice.publish_date,
      payment: invoice.payment.value(),
      commission_tax: invoice.commission_tax.value(),
      commission_tax_rate: invoice.commission_tax_rate.value(),
      consumption_tax: invoice.consumption_tax.value(),
      tax_rate: invoice.tax_rate.value(),
      billing_amount: invoice.billing_amount.value(),
      payment_date: invoice.payment_date,
      status: invoice.status.as_str().to_string(),
    }
  }
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: CreateInvoiceCommand) -> Result<InvoiceDto, InvoiceError> {
    let data = NewInvoice {
      company_guid: command.company_guid,
      customer_guid: command.customer_guid,
      publish_date: command.publish_date,
      payment: Amount::new(command.payment)?,
      commission_tax_rate: TaxRate::new(command.commission_tax_rate)?,
      tax_rate: TaxRate::new(command.tax_rate)?,
      payment_date: command.payment_date,
    };

    let invoice = self.invoice_service.create_invoice(data).await?;

    Ok(invoice.into())
  }
}
