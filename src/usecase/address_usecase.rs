use crate::domain::{
    error::{DomainError, RepositoryError},
    models::{
        address::{Address, AddressBook},
        user::UserId,
    },
    repositories::address_repository::AddressRepository,
};

pub struct AddressUsecase<A: AddressRepository> {
    address_repository: A,
}

impl<A: AddressRepository> AddressUsecase<A> {
    pub fn new(address_repository: A) -> Self {
        Self { address_repository }
    }

    pub async fn get_address(&self, user_id: i32) -> Result<AddressBook, DomainError>
    where
        A: Send + Sync,
    {
        let user_id = UserId::new(user_id)?;
        let book = self
            .address_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(book)
    }

    pub async fn add_address(&self, user_id: i32, address: Address) -> Result<(), DomainError>
    where
        A: Send + Sync,
    {
        let user_id = UserId::new(user_id)?;
        self.address_repository
            .append_address(user_id, address)
            .await?;
        Ok(())
    }
}
