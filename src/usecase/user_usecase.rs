use chrono::Utc;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::user::{DATE_FORMAT, NewUserRecord, ProfileChanges, User, UserId, UserStatus},
    repositories::user_repository::UserRepository,
    services::password_service::PasswordHasher,
};

/// Input for user creation; everything store-assigned (id, status,
/// date_created) is absent by construction.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

pub struct UserUsecase<U: UserRepository, P: PasswordHasher> {
    user_repository: U,
    password_hasher: P,
}

impl<U: UserRepository, P: PasswordHasher> UserUsecase<U, P> {
    pub fn new(user_repository: U, password_hasher: P) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    pub async fn save(&self, new_user: NewUser) -> Result<User, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        let password_digest = self.password_hasher.hash(&new_user.password)?;
        let date_created = Utc::now().format(DATE_FORMAT).to_string();
        let status = UserStatus::Active;

        let record = NewUserRecord {
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            email: new_user.email.clone(),
            date_created: date_created.clone(),
            status,
            password_digest,
            phone: new_user.phone.clone(),
        };

        let id = self.user_repository.insert(record).await?;

        Ok(User::new(
            id,
            new_user.first_name,
            new_user.last_name,
            new_user.email,
            date_created,
            status,
            new_user.phone,
        ))
    }

    pub async fn get(&self, id: i32) -> Result<User, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        let id = UserId::new(id)?;
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(user)
    }

    pub async fn update(&self, id: i32, changes: ProfileChanges) -> Result<User, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        let id = UserId::new(id)?;
        self.user_repository.update_profile(id, changes).await?;

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        let id = UserId::new(id)?;
        self.user_repository.delete(id).await?;
        Ok(())
    }

    pub async fn find_by_status(&self, status: &str) -> Result<Vec<User>, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        let users = self.user_repository.find_by_status(status).await?;

        // An empty result set is reported as NotFound; callers rely on it.
        if users.is_empty() {
            return Err(RepositoryError::NotFound.into());
        }
        Ok(users)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        let password_digest = self.password_hasher.hash(password)?;

        // A miss on either the email or the password surfaces as the same
        // NotFound; the two cases are not distinguishable to the caller.
        let user = self
            .user_repository
            .find_by_credentials(email, &password_digest)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::models::credential::HashedPassword;
    use crate::infrastructure::sha256_password_hasher::Sha256PasswordHasher;

    /// Records the inserted row and hands out a fixed id.
    #[derive(Clone, Default)]
    struct CapturingUserRepository {
        inserted: Arc<Mutex<Option<NewUserRecord>>>,
    }

    #[async_trait]
    impl UserRepository for CapturingUserRepository {
        async fn insert(&self, record: NewUserRecord) -> Result<UserId, RepositoryError> {
            *self.inserted.lock().unwrap() = Some(record);
            Ok(UserId::new(7).unwrap())
        }

        async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn update_profile(
            &self,
            _id: UserId,
            _changes: ProfileChanges,
        ) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn delete(&self, _id: UserId) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn find_by_status(&self, _status: &str) -> Result<Vec<User>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_credentials(
            &self,
            _email: &str,
            _password_digest: &HashedPassword,
        ) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }
    }

    fn usecase() -> (
        UserUsecase<CapturingUserRepository, Sha256PasswordHasher>,
        CapturingUserRepository,
    ) {
        let repository = CapturingUserRepository::default();
        (
            UserUsecase::new(repository.clone(), Sha256PasswordHasher::new()),
            repository,
        )
    }

    fn new_user() -> NewUser {
        NewUser {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
            phone: "123".to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_defaults_and_digests_password() {
        let (usecase, repository) = usecase();

        let user = usecase.save(new_user()).await.unwrap();
        assert_eq!(user.id().as_i32(), 7);
        assert_eq!(user.status(), UserStatus::Active);

        let record = repository.inserted.lock().unwrap().take().unwrap();
        assert_eq!(record.status, UserStatus::Active);
        assert_ne!(record.password_digest.as_str(), "pw");
        assert_eq!(record.password_digest.as_str().len(), 64);
        assert!(NaiveDateTime::parse_from_str(&record.date_created, DATE_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn find_by_status_with_no_matches_is_not_found() {
        let (usecase, _) = usecase();

        let result = usecase.find_by_status("Inactive").await;
        assert!(matches!(
            result,
            Err(DomainError::Repository(RepositoryError::NotFound))
        ));
    }

    #[tokio::test]
    async fn authenticate_miss_is_not_found() {
        let (usecase, _) = usecase();

        let result = usecase.authenticate("a@b.com", "wrong").await;
        assert!(matches!(
            result,
            Err(DomainError::Repository(RepositoryError::NotFound))
        ));
    }

    #[tokio::test]
    async fn get_rejects_non_positive_id() {
        let (usecase, _) = usecase();

        assert!(matches!(
            usecase.get(0).await,
            Err(DomainError::InvalidUserId)
        ));
        assert!(matches!(
            usecase.get(-1).await,
            Err(DomainError::InvalidUserId)
        ));
    }
}
