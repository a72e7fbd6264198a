pub mod create_invoice;
pub mod list_invoices;

pub use create_invoice::{CreateInvoiceCommand, CreateInvoiceUseCase, InvoiceDto};
pub use list_invoices::{ListInvoicesCommand, ListInvoicesResponse, ListInvoicesUseCase};
