// tests/support/builders.rs
use chrono::Utc;
use uuid::Uuid;

use roster_core::domain::user::{
    Credential, EmailAddress, Handle, PasswordHash, PersonName, User, UserId,
};

pub struct UserBuilder {
    id: i64,
    email: String,
    password_hash: Option<String>,
    is_active: bool,
    is_admin: bool,
    is_superuser: bool,
    first_name: Option<String>,
    last_name: Option<String>,
    handle: Option<String>,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            email: "user@example.com".into(),
            password_hash: None,
            is_active: true,
            is_admin: false,
            is_superuser: false,
            first_name: None,
            last_name: None,
            handle: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    pub fn superuser(mut self) -> Self {
        self.is_superuser = true;
        self
    }

    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn build(self) -> User {
        let credential = match self.password_hash {
            Some(hash) => Credential::usable(PasswordHash::new(hash).unwrap()),
            None => Credential::Unusable,
        };

        User {
            id: UserId::new(self.id).unwrap(),
            email: EmailAddress::new(self.email).unwrap(),
            credential,
            is_active: self.is_active,
            is_admin: self.is_admin,
            is_superuser: self.is_superuser,
            first_name: self.first_name.map(|name| PersonName::new(name).unwrap()),
            last_name: self.last_name.map(|name| PersonName::new(name).unwrap()),
            handle: self.handle.map(|handle| Handle::new(handle).unwrap()),
            jwt_key: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
