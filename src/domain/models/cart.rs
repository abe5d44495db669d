use serde::{Deserialize, Serialize};

use crate::domain::models::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub item_id: String,
    pub quantity: i32,
}

/// Per-user cart document, same single-document-per-user shape as the
/// address book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
}
