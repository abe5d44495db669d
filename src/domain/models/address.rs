use serde::{Deserialize, Serialize};

use crate::domain::models::user::UserId;

/// One postal address. The persistence layer treats these fields as an
/// opaque payload; only the owning user id means anything to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// Per-user address document. At most one exists per user id; addresses keep
/// insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBook {
    pub user_id: UserId,
    pub addresses: Vec<Address>,
}
