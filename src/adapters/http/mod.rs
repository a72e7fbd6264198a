pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  CreateInvoiceRequest, ErrorResponse, InvoiceResponse, ListInvoicesQuery, ListInvoicesResponse,
};
pub use errors::{ApiError, AuthErrorKind};
pub use handlers::invoices::{create_invoice_handler, list_invoices_handler};
pub use middleware::{AuthMiddleware, RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{configure_invoice_routes, health_check};
