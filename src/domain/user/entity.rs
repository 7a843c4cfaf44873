// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Credential, EmailAddress, Handle, PersonName, UserId};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account.
///
/// Accounts are only ever created through the creation command so that email
/// normalization and credential handling stay uniform. There is no delete;
/// `deactivate` is the substitute.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub credential: Credential,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_superuser: bool,
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub handle: Option<Handle>,
    /// Per-account token signing key for the session collaborator. Never
    /// part of the login-data projection.
    pub jwt_key: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Space-joined profile names, the source text for the display handle.
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub credential: Credential,
    pub is_active: bool,
    pub is_admin: bool,
    pub jwt_key: Uuid,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// New accounts never start as superusers; promotion is a separate
    /// repository operation.
    pub fn new(
        email: EmailAddress,
        credential: Credential,
        is_active: bool,
        is_admin: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            credential,
            is_active,
            is_admin,
            jwt_key: Uuid::new_v4(),
            created_at,
        }
    }
}

/// Partial profile update. The field set here is the entire update
/// allow-list: profile names plus the handle derived from them. `None`
/// leaves a column untouched.
#[derive(Debug, Clone)]
pub struct UserProfileUpdate {
    pub id: UserId,
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub handle: Option<Handle>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfileUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            handle: None,
            updated_at,
        }
    }

    pub fn with_first_name(mut self, first_name: PersonName) -> Self {
        self.first_name = Some(first_name);
        self
    }

    pub fn with_last_name(mut self, last_name: PersonName) -> Self {
        self.last_name = Some(last_name);
        self
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }
}
