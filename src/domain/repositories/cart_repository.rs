use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{cart::CartItem, user::UserId},
};

#[async_trait]
pub trait CartRepository {
    /// Append to the user's cart document, creating it on first write.
    async fn append_item(&self, user_id: UserId, item: CartItem) -> Result<(), RepositoryError>;

    /// Remove an item by id. Fails with `NotFound` when the user has no cart
    /// document; removing an absent item from an existing cart is a no-op.
    async fn remove_item(&self, user_id: UserId, item_id: &str) -> Result<(), RepositoryError>;
}
