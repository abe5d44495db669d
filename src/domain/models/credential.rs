use serde::{Deserialize, Serialize};

/// Value object representing a password digest. Stored and supplied
/// credentials are compared by digest equality, never as plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already digested string
    pub fn new(digest: String) -> Self {
        Self(digest)
    }

    /// Get the digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
