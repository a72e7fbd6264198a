//! Application layer
//!
//! Use cases that turn raw input into domain values and orchestrate the
//! domain services.

pub mod auth;
pub mod invoice;
