use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::{Amount, InvoiceStatus, TaxRate, ValueObjectError};

/// Caller-supplied fields of an invoice about to be issued.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
  pub company_guid: Uuid,
  pub customer_guid: Uuid,
  pub publish_date: DateTime<Utc>,
  pub payment: Amount,
  pub commission_tax_rate: TaxRate,
  pub tax_rate: TaxRate,
  pub payment_date: DateTime<Utc>,
}

// Invoice - a bill issued by a company to one of its customers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
  pub guid: Uuid,
  pub company_guid: Uuid,
  pub customer_guid: Uuid,
  pub publish_date: DateTime<Utc>,
  pub payment: Amount,
  pub commission_tax: Amount,
  pub commission_tax_rate: TaxRate,
  pub consumption_tax: Amount,
  pub tax_rate: TaxRate,
  pub billing_amount: Amount,
  pub payment_date: DateTime<Utc>,
  pub status: InvoiceStatus,
}

impl Invoice {
  /// Issues a new invoice, deriving the tax amounts from `payment`.
  ///
  /// The commission tax is charged on the payment, the consumption tax on the
  /// commission tax, and the billing amount is the sum of all three. Both
  /// taxes are rounded down to whole units.
  pub fn issue(guid: Uuid, data: NewInvoice) -> Result<Self, ValueObjectError> {
    if data.payment.is_zero() {
      return Err(ValueObjectError::InvalidAmount(
        "Payment must be greater than zero".to_string(),
      ));
    }

    let commission_tax = data.payment.apply_rate(data.commission_tax_rate)?;
    let consumption_tax = commission_tax.apply_rate(data.tax_rate)?;
    let billing_amount = data
      .payment
      .checked_add(commission_tax)?
      .checked_add(consumption_tax)?;

    Ok(Self {
      guid,
      company_guid: data.company_guid,
      customer_guid: data.customer_guid,
      publish_date: data.publish_date,
      payment: data.payment,
      commission_tax,
      commission_tax_rate: data.commission_tax_rate,
      consumption_tax,
      tax_rate: data.tax_rate,
      billing_amount,
      payment_date: data.payment_date,
      status: InvoiceStatus::Unprocessed,
    })
  }
}
