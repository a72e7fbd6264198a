mod argon2_hasher;
mod guid_generator;

pub use argon2_hasher::Argon2PasswordHasher;
pub use guid_generator::UuidGuidGenerator;
