use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::invoice::{
  Amount, Invoice, InvoiceStatus, PaymentPeriod, TaxRate, errors::InvoiceError,
  ports::InvoiceRepository,
};

// Spelling written by earlier releases for paid invoices
const LEGACY_PAID_STATUS: &str = "paied";

#[derive(Debug, FromRow)]
struct CustomerOwnerRow {
  id: i64,
  company_id: i64,
}

#[derive(Debug, FromRow)]
struct InvoiceRow {
  guid: Uuid,
  company_guid: Uuid,
  customer_guid: Uuid,
  publish_date: DateTime<Utc>,
  payment: i64,
  commission_tax: i64,
  commission_tax_rate: Decimal,
  consumption_tax: i64,
  tax_rate: Decimal,
  billing_amount: i64,
  payment_date: DateTime<Utc>,
  status: String,
}

impl TryFrom<InvoiceRow> for Invoice {
  type Error = InvoiceError;

  fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
    let guid = row.guid;
    let amount = move |value: i64| {
      Amount::new(value)
        .map_err(|e| InvoiceError::Internal(format!("Corrupt amount on invoice {}: {}", guid, e)))
    };
    let rate = move |value: Decimal| {
      TaxRate::new(value).map_err(|e| {
        InvoiceError::Internal(format!("Corrupt tax rate on invoice {}: {}", guid, e))
      })
    };

    Ok(Invoice {
      guid: row.guid,
      company_guid: row.company_guid,
      customer_guid: row.customer_guid,
      publish_date: row.publish_date,
      payment: amount(row.payment)?,
      commission_tax: amount(row.commission_tax)?,
      commission_tax_rate: rate(row.commission_tax_rate)?,
      consumption_tax: amount(row.consumption_tax)?,
      tax_rate: rate(row.tax_rate)?,
      billing_amount: amount(row.billing_amount)?,
      payment_date: row.payment_date,
      status: status_from_storage(&row.status)?,
    })
  }
}

/// Maps a stored status value to the domain status.
///
/// Accepts the legacy `paied` spelling; any other unknown value is an error.
pub fn status_from_storage(value: &str) -> Result<InvoiceStatus, InvoiceError> {
  if value == LEGACY_PAID_STATUS {
    return Ok(InvoiceStatus::Paid);
  }
  InvoiceStatus::from_str(value).map_err(|_| InvoiceError::UnknownStatus(value.to_string()))
}

pub fn status_to_storage(status: InvoiceStatus) -> &'static str {
  status.as_str()
}

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let customer = sqlx::query_as::<_, CustomerOwnerRow>(
      r#"
            SELECT id, company_id
            FROM customers
            WHERE guid = $1
            "#,
    )
    .bind(invoice.customer_guid)
    .fetch_optional(&self.pool)
    .await?
    .ok_or(InvoiceError::CustomerNotFound(invoice.customer_guid))?;

    let owner_guid = sqlx::query_scalar::<_, Uuid>(
      r#"
            SELECT guid
            FROM companies
            WHERE id = $1
            "#,
    )
    .bind(customer.company_id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or(InvoiceError::CustomerNotFound(invoice.customer_guid))?;

    if owner_guid != invoice.company_guid {
      tracing::warn!(
        company_guid = %invoice.company_guid,
        customer_guid = %invoice.customer_guid,
        "Customer belongs to another company"
      );
      return Err(InvoiceError::CompanyMismatch {
        company_guid: invoice.company_guid,
        customer_guid: invoice.customer_guid,
      });
    }

    sqlx::query(
      r#"
            INSERT INTO invoices (
                guid, company_id, customer_id, publish_date, payment,
                commission_tax, commission_tax_rate, consumption_tax, tax_rate,
                billing_amount, payment_date, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
    )
    .bind(invoice.guid)
    .bind(customer.company_id)
    .bind(customer.id)
    .bind(invoice.publish_date)
    .bind(invoice.payment.value())
    .bind(invoice.commission_tax.value())
    .bind(invoice.commission_tax_rate.value())
    .bind(invoice.consumption_tax.value())
    .bind(invoice.tax_rate.value())
    .bind(invoice.billing_amount.value())
    .bind(invoice.payment_date)
    .bind(status_to_storage(invoice.status))
    .execute(&self.pool)
    .await?;

    Ok(invoice)
  }

  async fn list(
    &self,
    company_guid: Uuid,
    period: PaymentPeriod,
  ) -> Result<Vec<Invoice>, InvoiceError> {
    let company_id = sqlx::query_scalar::<_, i64>(
      r#"
            SELECT id
            FROM companies
            WHERE guid = $1
            "#,
    )
    .bind(company_guid)
    .fetch_optional(&self.pool)
    .await?
    .ok_or(InvoiceError::CompanyNotFound(company_guid))?;

    let rows = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT i.guid, co.guid AS company_guid, cu.guid AS customer_guid,
                   i.publish_date, i.payment, i.commission_tax, i.commission_tax_rate,
                   i.consumption_tax, i.tax_rate, i.billing_amount, i.payment_date, i.status
            FROM invoices i
            INNER JOIN customers cu ON cu.id = i.customer_id
            INNER JOIN companies co ON co.id = i.company_id
            WHERE i.company_id = $1
              AND i.payment_date BETWEEN $2 AND $3
            ORDER BY i.payment_date ASC, i.id ASC
            "#,
    )
    .bind(company_id)
    .bind(period.first())
    .bind(period.last())
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
