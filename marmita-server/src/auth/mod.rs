//! Authentication module
//!
//! JWT token issuing/validation. Password hashing lives on the user model
//! (argon2), mirroring where the credential data is stored.

pub mod jwt;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
