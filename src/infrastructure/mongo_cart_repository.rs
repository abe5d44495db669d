use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{self, doc},
};

use crate::domain::{
    error::RepositoryError,
    models::{
        cart::{Cart, CartItem},
        user::UserId,
    },
    repositories::cart_repository::CartRepository,
};

const COLLECTION_NAME: &str = "carts";

#[derive(Clone)]
pub struct MongoCartRepository {
    collection: Collection<Cart>,
}

impl MongoCartRepository {
    pub fn new(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    async fn append_item(&self, user_id: UserId, item: CartItem) -> Result<(), RepositoryError> {
        let item = bson::to_bson(&item).map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.collection
            .update_one(
                doc! { "user_id": user_id.as_i32() },
                doc! { "$push": { "items": item } },
            )
            .upsert(true)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn remove_item(&self, user_id: UserId, item_id: &str) -> Result<(), RepositoryError> {
        let result = self
            .collection
            .update_one(
                doc! { "user_id": user_id.as_i32() },
                doc! { "$pull": { "items": { "item_id": item_id } } },
            )
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
