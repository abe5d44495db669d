use crate::domain::{
    error::DomainError,
    models::{cart::CartItem, user::UserId},
    repositories::cart_repository::CartRepository,
};

pub struct CartUsecase<C: CartRepository> {
    cart_repository: C,
}

impl<C: CartRepository> CartUsecase<C> {
    pub fn new(cart_repository: C) -> Self {
        Self { cart_repository }
    }

    pub async fn add_item(&self, user_id: i32, item: CartItem) -> Result<(), DomainError>
    where
        C: Send + Sync,
    {
        let user_id = UserId::new(user_id)?;
        self.cart_repository.append_item(user_id, item).await?;
        Ok(())
    }

    pub async fn remove_item(&self, user_id: i32, item_id: &str) -> Result<(), DomainError>
    where
        C: Send + Sync,
    {
        let user_id = UserId::new(user_id)?;
        self.cart_repository.remove_item(user_id, item_id).await?;
        Ok(())
    }
}
