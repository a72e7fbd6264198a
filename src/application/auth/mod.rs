//! Authentication use cases

mod authenticate_user;

pub use authenticate_user::{AuthenticateUserCommand, AuthenticateUserUseCase};
