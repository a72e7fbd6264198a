use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid tax rate: {0}")]
  InvalidTaxRate(String),
  #[error("Invalid payment period: {0}")]
  InvalidPaymentPeriod(String),
  #[error("Invalid invoice status: {0}")]
  InvalidStatus(String),
}

// Invoice Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Unprocessed,
  Processing,
  Paid,
  Error,
}

impl InvoiceStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::Unprocessed => "unprocessed",
      InvoiceStatus::Processing => "processing",
      InvoiceStatus::Paid => "paid",
      InvoiceStatus::Error => "error",
    }
  }
}

impl FromStr for InvoiceStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "unprocessed" => Ok(InvoiceStatus::Unprocessed),
      "processing" => Ok(InvoiceStatus::Processing),
      "paid" => Ok(InvoiceStatus::Paid),
      "error" => Ok(InvoiceStatus::Error),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}

impl fmt::Display for InvoiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// Amount - whole currency units (yen), never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
  pub const ZERO: Amount = Amount(0);

  pub fn new(value: i64) -> Result<Self, ValueObjectError> {
    if value < 0 {
      return Err(ValueObjectError::InvalidAmount(
        "Amount cannot be negative".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> i64 {
    self.0
  }

  pub fn is_zero(&self) -> bool {
    self.0 == 0
  }

  /// Applies `rate` and drops the fractional part.
  pub fn apply_rate(&self, rate: TaxRate) -> Result<Amount, ValueObjectError> {
    let product = (Decimal::from(self.0) * rate.value()).floor();
    let value = i64::try_from(product).map_err(|_| {
      ValueObjectError::InvalidAmount(format!("Amount out of range: {}", product))
    })?;
    Amount::new(value)
  }

  pub fn checked_add(&self, other: Amount) -> Result<Amount, ValueObjectError> {
    self
      .0
      .checked_add(other.0)
      .map(Amount)
      .ok_or_else(|| ValueObjectError::InvalidAmount("Amount is too large".to_string()))
  }
}

impl fmt::Display for Amount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Tax Rate - fraction between 0 and 1 (0.10 = 10%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxRate(Decimal);

impl TaxRate {
  /// Decimal places the rate columns hold
  pub const MAX_SCALE: u32 = 4;

  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value.is_sign_negative() && !value.is_zero() {
      return Err(ValueObjectError::InvalidTaxRate(
        "Tax rate cannot be negative".to_string(),
      ));
    }
    if value > Decimal::ONE {
      return Err(ValueObjectError::InvalidTaxRate(
        "Tax rate cannot exceed 1".to_string(),
      ));
    }
    let value = value.normalize();
    if value.scale() > Self::MAX_SCALE {
      return Err(ValueObjectError::InvalidTaxRate(format!(
        "Tax rate cannot have more than {} decimal places",
        Self::MAX_SCALE
      )));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

impl fmt::Display for TaxRate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Payment Period - inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentPeriod {
  first: DateTime<Utc>,
  last: DateTime<Utc>,
}

impl PaymentPeriod {
  pub fn new(first: DateTime<Utc>, last: DateTime<Utc>) -> Result<Self, ValueObjectError> {
    if first > last {
      return Err(ValueObjectError::InvalidPaymentPeriod(format!(
        "first payment date {} is after last payment date {}",
        first.to_rfc3339(),
        last.to_rfc3339()
      )));
    }
    Ok(Self { first, last })
  }

  pub fn first(&self) -> DateTime<Utc> {
    self.first
  }

  pub fn last(&self) -> DateTime<Utc> {
    self.last
  }

  pub fn contains(&self, date: DateTime<Utc>) -> bool {
    self.first <= date && date <= self.last
  }
}
