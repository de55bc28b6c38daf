//! User Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

pub type UserId = RecordId;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "CLIENTE")]
    Customer,
}

impl Role {
    /// Wire name, used in token claims and logs
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Customer => "CLIENTE",
        }
    }
}

/// User document
///
/// The password hash is never serialized, so API responses can return the
/// user directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha_hash", skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// Create user payload (plaintext password, hashed before storage)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    pub role: Role,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// Partial update payload; password changes are not supported here
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<Role>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
}

impl UserUpdate {
    /// True when no field is set (empty patch)
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none() && self.phone.is_none()
    }
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = User::hash_password("segredo123").expect("hashing should succeed");
        assert_ne!(hash, "segredo123");

        let user = User {
            id: None,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: hash,
            role: Role::Customer,
            phone: "11999990000".to_string(),
        };

        assert!(user.verify_password("segredo123").expect("verify should succeed"));
        assert!(!user.verify_password("errada").expect("verify should succeed"));
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: None,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            role: Role::Admin,
            phone: "11999990000".to_string(),
        };

        let json = serde_json::to_value(&user).expect("serialization should succeed");
        assert!(json.get("senha_hash").is_none());
        assert_eq!(json.get("role"), Some(&serde_json::json!("ADMIN")));
    }
}
