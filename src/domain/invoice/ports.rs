use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Invoice;
use super::errors::InvoiceError;
use super::value_objects::PaymentPeriod;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  /// Persists `invoice` after checking that its customer exists and belongs
  /// to `invoice.company_guid`.
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;

  /// Returns the company's invoices whose payment date falls inside `period`.
  async fn list(
    &self,
    company_guid: Uuid,
    period: PaymentPeriod,
  ) -> Result<Vec<Invoice>, InvoiceError>;
}

pub trait GuidGenerator: Send + Sync {
  fn generate(&self) -> Uuid;
}
