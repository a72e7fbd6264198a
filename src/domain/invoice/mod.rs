pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Invoice, NewInvoice};
pub use errors::InvoiceError;
pub use ports::{GuidGenerator, InvoiceRepository};
pub use services::InvoiceService;
pub use value_objects::{Amount, InvoiceStatus, PaymentPeriod, TaxRate, ValueObjectError};
