use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        address::{Address, AddressBook},
        user::UserId,
    },
};

#[async_trait]
pub trait AddressRepository {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<AddressBook>, RepositoryError>;

    /// Append to the user's address document, creating it on first write.
    async fn append_address(
        &self,
        user_id: UserId,
        address: Address,
    ) -> Result<(), RepositoryError>;
}
