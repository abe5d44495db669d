use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::models::credential::HashedPassword;

/// Layout of `date_created`; clients receive the value verbatim.
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Store-assigned identity. Always positive once a row exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(i32);

impl UserId {
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidUserId);
        }
        Ok(Self(value))
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as exposed by the domain. The password digest stays in the
/// relational row and never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    date_created: String,
    status: UserStatus,
    phone: String,
}

impl User {
    pub fn new(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
        date_created: String,
        status: UserStatus,
        phone: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            date_created,
            status,
            phone,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn date_created(&self) -> &str {
        &self.date_created
    }
    pub fn status(&self) -> UserStatus {
        self.status
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Complete row handed to the relational store for insertion; everything
/// except the store-assigned id is already decided.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: UserStatus,
    pub password_digest: HashedPassword,
    pub phone: String,
}

/// Fields reachable through profile update. Identity, status, credentials
/// and date_created are not updatable through this path.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}
