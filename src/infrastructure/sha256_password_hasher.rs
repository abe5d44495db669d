use sha2::{Digest, Sha256};

use crate::domain::{
    error::DomainError, models::credential::HashedPassword,
    services::password_service::PasswordHasher,
};

/// Unsalted SHA-256 digest, hex encoded. The relational store authenticates
/// by exact (email, digest) lookup, so the same plaintext must always
/// produce the same digest.
#[derive(Clone)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        let digest = Sha256::digest(plain_password.as_bytes());
        Ok(HashedPassword::new(hex::encode(digest)))
    }
}
