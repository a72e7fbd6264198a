use uuid::Uuid;

use crate::domain::invoice::ports::GuidGenerator;

/// Generates random (v4) UUIDs for new invoices
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGuidGenerator;

impl UuidGuidGenerator {
  pub fn new() -> Self {
    Self
  }
}

impl GuidGenerator for UuidGuidGenerator {
  fn generate(&self) -> Uuid {
    Uuid::new_v4()
  }
}
