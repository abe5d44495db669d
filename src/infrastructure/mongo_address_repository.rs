use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{self, doc},
};

use crate::domain::{
    error::RepositoryError,
    models::{
        address::{Address, AddressBook},
        user::UserId,
    },
    repositories::address_repository::AddressRepository,
};

const COLLECTION_NAME: &str = "addresses";

#[derive(Clone)]
pub struct MongoAddressRepository {
    collection: Collection<AddressBook>,
}

impl MongoAddressRepository {
    pub fn new(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl AddressRepository for MongoAddressRepository {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<AddressBook>, RepositoryError> {
        self.collection
            .find_one(doc! { "user_id": user_id.as_i32() })
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn append_address(
        &self,
        user_id: UserId,
        address: Address,
    ) -> Result<(), RepositoryError> {
        let address = bson::to_bson(&address)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        // $push appends atomically at the store; upsert creates the document
        // on the first write for a user.
        self.collection
            .update_one(
                doc! { "user_id": user_id.as_i32() },
                doc! { "$push": { "addresses": address } },
            )
            .upsert(true)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
