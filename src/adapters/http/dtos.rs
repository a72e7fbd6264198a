use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::application::invoice::{CreateInvoiceCommand, InvoiceDto, ListInvoicesCommand};
use crate::domain::invoice::TaxRate;

fn validate_tax_rate(rate: &Decimal) -> Result<(), ValidationError> {
  if *rate < Decimal::ZERO || *rate > Decimal::ONE {
    let mut error = ValidationError::new("tax_rate_range");
    error.message = Some(Cow::Borrowed("Tax rates must be between 0 and 1"));
    return Err(error);
  }
  if rate.normalize().scale() > TaxRate::MAX_SCALE {
    let mut error = ValidationError::new("tax_rate_scale");
    error.message = Some(Cow::Borrowed(
      "Tax rates cannot have more than 4 decimal places",
    ));
    return Err(error);
  }
  Ok(())
}

/// Request for issuing a new invoice
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
  pub company_guid: Uuid,
  pub customer_guid: Uuid,
  pub publish_date: DateTime<Utc>,

  #[validate(range(min = 1, message = "Payment must be greater than zero"))]
  pub payment: i64,

  /// Fraction of the payment charged as commission (0.04 = 4%)
  #[validate(custom(function = "validate_tax_rate"))]
  pub commission_tax_rate: Decimal,

  /// Consumption tax rate applied to the commission
  #[validate(custom(function = "validate_tax_rate"))]
  pub tax_rate: Decimal,

  pub payment_date: DateTime<Utc>,
}

impl From<CreateInvoiceRequest> for CreateInvoiceCommand {
  fn from(request: CreateInvoiceRequest) -> Self {
    Self {
      company_guid: request.company_guid,
      customer_guid: request.customer_guid,
      publish_date: request.publish_date,
      payment: request.payment,
      commission_tax_rate: request.commission_tax_rate,
      tax_rate: request.tax_rate,
      payment_date: request.payment_date,
    }
  }
}

/// Query string of the invoice listing, both dates inclusive
#[derive(Debug, Clone, Deserialize)]
pub struct ListInvoicesQuery {
  pub first_payment_date: DateTime<Utc>,
  pub last_payment_date: DateTime<Utc>,
}

impl ListInvoicesQuery {
  pub fn into_command(self, company_guid: Uuid) -> ListInvoicesCommand {
    ListInvoicesCommand {
      company_guid,
      first_payment_date: self.first_payment_date,
      last_payment_date: self.last_payment_date,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceResponse {
  pub guid: Uuid,
  pub company_guid: Uuid,
  pub customer_guid: Uuid,
  pub publish_date: DateTime<Utc>,
  pub payment: i64,
  pub commission_tax: i64,
  #[serde(with = "rust_decimal::serde::float")]
  pub commission_tax_rate: Decimal,
  pub consumption_tax: i64,
  #[serde(with = "rust_decimal::serde::float")]
  pub tax_rate: Decimal,
  pub billing_amount: i64,
  pub payment_date: DateTime<Utc>,
  pub status: String,
}

impl From<InvoiceDto> for InvoiceResponse {
  fn from(dto: InvoiceDto) -> Self {
    Self {
      guid: dto.guid,
      company_guid: dto.company_guid,
      customer_guid: dto.customer_guid,
      publish_date: dto.publish_date,
      payment: dto.payment,
      commission_tax: dto.commission_tax,
      commission_tax_rate: dto.commission_tax_rate,
      consumption_tax: dto.consumption_tax,
      tax_rate: dto.tax_rate,
      billing_amount: dto.billing_amount,
      payment_date: dto.payment_date,
      status: dto.status,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceResponse>,
}

/// Error response structure
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
