use super::value_objects::ValueObjectError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Customer not found: {0}")]
  CustomerNotFound(Uuid),

  #[error("Company not found: {0}")]
  CompanyNotFound(Uuid),

  #[error("Company {company_guid} does not own customer {customer_guid}")]
  CompanyMismatch {
    company_guid: Uuid,
    customer_guid: Uuid,
  },

  #[error("Unknown invoice status in storage: {0}")]
  UnknownStatus(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Internal error: {0}")]
  Internal(String),
}
