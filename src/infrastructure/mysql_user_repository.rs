use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::domain::{
    error::RepositoryError,
    models::{
        credential::HashedPassword,
        user::{NewUserRecord, ProfileChanges, User, UserId, UserStatus},
    },
    repositories::user_repository::UserRepository,
};
use crate::entity::users;

#[derive(Clone)]
pub struct MysqlUserRepository {
    db: DatabaseConnection,
}

impl MysqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_model(model: users::Model) -> Result<User, RepositoryError> {
    let id = UserId::new(model.id).map_err(|_| {
        RepositoryError::DatabaseError(format!("non-positive user id {} in store", model.id))
    })?;
    let status = UserStatus::parse(&model.status).ok_or_else(|| {
        RepositoryError::DatabaseError(format!("unknown user status {:?} in store", model.status))
    })?;

    Ok(User::new(
        id,
        model.first_name,
        model.last_name,
        model.email,
        model.date_created,
        status,
        model.phone,
    ))
}

fn map_write_err(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            RepositoryError::AlreadyExists(message)
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn insert(&self, record: NewUserRecord) -> Result<UserId, RepositoryError> {
        let model = users::ActiveModel {
            id: NotSet,
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            email: Set(record.email),
            date_created: Set(record.date_created),
            status: Set(record.status.as_str().to_string()),
            password: Set(record.password_digest.as_str().to_string()),
            phone: Set(record.phone),
        };

        let result = users::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_write_err)?;

        UserId::new(result.last_insert_id).map_err(|_| {
            RepositoryError::DatabaseError(format!(
                "store assigned non-positive id {}",
                result.last_insert_id
            ))
        })
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let model = users::Entity::find_by_id(id.as_i32())
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        model.map(map_model).transpose()
    }

    async fn update_profile(
        &self,
        id: UserId,
        changes: ProfileChanges,
    ) -> Result<(), RepositoryError> {
        if changes.is_empty() {
            // Nothing to write; still report a missing row as NotFound.
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(RepositoryError::NotFound),
            };
        }

        let mut model = users::ActiveModel {
            id: Unchanged(id.as_i32()),
            ..Default::default()
        };
        if let Some(first_name) = changes.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(email) = changes.email {
            model.email = Set(email);
        }
        if let Some(phone) = changes.phone {
            model.phone = Set(phone);
        }

        match users::Entity::update(model).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(map_write_err(e)),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = users::Entity::delete_by_id(id.as_i32())
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<User>, RepositoryError> {
        let models = users::Entity::find()
            .filter(users::Column::Status.eq(status))
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(map_model).collect()
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password_digest: &HashedPassword,
    ) -> Result<Option<User>, RepositoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::Password.eq(password_digest.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        model.map(map_model).transpose()
    }
}
