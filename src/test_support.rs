//! In-memory doubles for the repository and generator ports, used by unit tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::auth::{
  AuthError, Email, LoginInfo, Password, PasswordHasher, UserCredentials, UserRepository,
};
use crate::domain::invoice::{
  GuidGenerator, Invoice, InvoiceError, InvoiceRepository, PaymentPeriod,
};

#[derive(Default)]
struct InvoiceStore {
  companies: Vec<Uuid>,
  // customer guid -> owning company guid
  customers: HashMap<Uuid, Uuid>,
  invoices: Vec<Invoice>,
}

/// Mirrors the lookup chain of the Postgres repository without a database
#[derive(Default)]
pub struct InMemoryInvoiceRepository {
  store: Mutex<InvoiceStore>,
}

impl InMemoryInvoiceRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_company(&self) -> Uuid {
    let guid = Uuid::new_v4();
    self.store.lock().unwrap().companies.push(guid);
    guid
  }

  pub fn add_customer(&self, company_guid: Uuid) -> Uuid {
    let guid = Uuid::new_v4();
    self
      .store
      .lock()
      .unwrap()
      .customers
      .insert(guid, company_guid);
    guid
  }

  pub fn stored(&self) -> Vec<Invoice> {
    self.store.lock().unwrap().invoices.clone()
  }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let mut store = self.store.lock().unwrap();

    let owner = store
      .customers
      .get(&invoice.customer_guid)
      .copied()
      .filter(|company| store.companies.contains(company))
      .ok_or(InvoiceError::CustomerNotFound(invoice.customer_guid))?;

    if owner != invoice.company_guid {
      return Err(InvoiceError::CompanyMismatch {
        company_guid: invoice.company_guid,
        customer_guid: invoice.customer_guid,
      });
    }

    store.invoices.push(invoice.clone());
    Ok(invoice)
  }

  async fn list(
    &self,
    company_guid: Uuid,
    period: PaymentPeriod,
  ) -> Result<Vec<Invoice>, InvoiceError> {
    let store = self.store.lock().unwrap();

    if !store.companies.contains(&company_guid) {
      return Err(InvoiceError::CompanyNotFound(company_guid));
    }

    let mut invoices: Vec<Invoice> = store
      .invoices
      .iter()
      .filter(|invoice| invoice.company_guid == company_guid)
      .filter(|invoice| period.contains(invoice.payment_date))
      .cloned()
      .collect();
    // stable sort: equal dates stay in insertion order
    invoices.sort_by_key(|invoice| invoice.payment_date);

    Ok(invoices)
  }
}

/// Hands out queued GUIDs first, then random ones
#[derive(Default)]
pub struct TestGuidGenerator {
  queued: Mutex<VecDeque<Uuid>>,
}

impl TestGuidGenerator {
  pub fn fixed(guid: Uuid) -> Self {
    Self {
      queued: Mutex::new(VecDeque::from([guid])),
    }
  }

  pub fn random() -> Self {
    Self::default()
  }
}

impl GuidGenerator for TestGuidGenerator {
  fn generate(&self) -> Uuid {
    self
      .queued
      .lock()
      .unwrap()
      .pop_front()
      .unwrap_or_else(Uuid::new_v4)
  }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
  users: Mutex<Vec<UserCredentials>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn add_user(
    &self,
    login: LoginInfo,
    email: &str,
    password: &str,
    hasher: &dyn PasswordHasher,
  ) {
    let password_hash = hasher
      .hash(&Password::new(password).unwrap())
      .await
      .unwrap();

    self.users.lock().unwrap().push(UserCredentials {
      guid: login.user_guid,
      company_guid: login.company_guid,
      email: Email::new(email).unwrap(),
      password_hash,
    });
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn find_credentials_by_email(
    &self,
    email: &Email,
  ) -> Result<Option<UserCredentials>, AuthError> {
    Ok(
      self
        .users
        .lock()
        .unwrap()
        .iter()
        .find(|user| &user.email == email)
        .cloned(),
    )
  }
}

/// Repository whose every call fails the way a lost database connection does
pub struct FailingInvoiceRepository;

#[async_trait]
impl InvoiceRepository for FailingInvoiceRepository {
  async fn create(&self, _invoice: Invoice) -> Result<Invoice, InvoiceError> {
    Err(InvoiceError::Database(sqlx::Error::PoolTimedOut))
  }

  async fn list(
    &self,
    _company_guid: Uuid,
    _period: PaymentPeriod,
  ) -> Result<Vec<Invoice>, InvoiceError> {
    Err(InvoiceError::Database(sqlx::Error::PoolTimedOut))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{Amount, NewInvoice, TaxRate};
  use chrono::{TimeZone, Utc};
  use rust_decimal_macros::dec;

  fn issue_on_day(guid: Uuid, company_guid: Uuid, customer_guid: Uuid, day: u32) -> Invoice {
    Invoice::issue(
      guid,
      NewInvoice {
        company_guid,
        customer_guid,
        publish_date: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        payment: Amount::new(10_000).unwrap(),
        commission_tax_rate: TaxRate::new(dec!(0.04)).unwrap(),
        tax_rate: TaxRate::new(dec!(0.1)).unwrap(),
        payment_date: Utc.with_ymd_and_hms(2024, 4, day, 0, 0, 0).unwrap(),
      },
    )
    .unwrap()
  }

  #[tokio::test]
  async fn test_in_memory_list_orders_by_date_then_insertion() {
    let repo = InMemoryInvoiceRepository::new();
    let company = repo.add_company();
    let customer = repo.add_customer(company);

    let later = issue_on_day(Uuid::new_v4(), company, customer, 20);
    let same_day_first = issue_on_day(Uuid::max(), company, customer, 15);
    let same_day_second = issue_on_day(Uuid::nil(), company, customer, 15);
    for invoice in [&later, &same_day_first, &same_day_second] {
      repo.create(invoice.clone()).await.unwrap();
    }

    let period = PaymentPeriod::new(
      Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
      Utc.with_ymd_and_hms(2024, 4, 30, 0, 0, 0).unwrap(),
    )
    .unwrap();
    let listed = repo.list(company, period).await.unwrap();

    assert_eq!(listed, vec![same_day_first, same_day_second, later]);
  }
}
