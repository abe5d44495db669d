use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        credential::HashedPassword,
        user::{NewUserRecord, ProfileChanges, User, UserId},
    },
};

#[async_trait]
pub trait UserRepository {
    /// Insert a complete profile row and return the store-assigned id.
    /// A unique-email collision is reported as `AlreadyExists`.
    async fn insert(&self, record: NewUserRecord) -> Result<UserId, RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Overwrite the given profile fields. Fails with `NotFound` when no row
    /// matches the id.
    async fn update_profile(
        &self,
        id: UserId,
        changes: ProfileChanges,
    ) -> Result<(), RepositoryError>;

    /// Hard delete. Fails with `NotFound` when no row matches the id.
    async fn delete(&self, id: UserId) -> Result<(), RepositoryError>;

    async fn find_by_status(&self, status: &str) -> Result<Vec<User>, RepositoryError>;

    /// Exact (email, digest) lookup used for authentication.
    async fn find_by_credentials(
        &self,
        email: &str,
        password_digest: &HashedPassword,
    ) -> Result<Option<User>, RepositoryError>;
}
