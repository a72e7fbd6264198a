pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{LoginInfo, UserCredentials};
pub use errors::{AuthError, HashError, RepositoryError};
pub use ports::{PasswordHasher, UserRepository};
pub use services::AuthService;
pub use value_objects::{Email, Password, PasswordHash, ValueObjectError};
