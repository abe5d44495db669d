use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Service for digesting passwords before storage or comparison
pub trait PasswordHasher: Clone {
    /// Digest a plain text password
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;
}
