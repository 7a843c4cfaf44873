// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

const MAX_EMAIL_LENGTH: usize = 255;

/// Normalized email address.
///
/// Construction trims the input and lowercases the whole address, so two
/// addresses differing only in case map to the same stored value and the
/// database unique index gives case-insensitive uniqueness. Addresses are
/// immutable once attached to an account; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "users must have an email address".into(),
            ));
        }

        let normalized = trimmed.to_lowercase();
        if normalized.len() > MAX_EMAIL_LENGTH {
            return Err(DomainError::Validation(format!(
                "email address must be at most {MAX_EMAIL_LENGTH} characters"
            )));
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "email address cannot contain whitespace".into(),
            ));
        }

        match normalized.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(normalized))
            }
            _ => Err(DomainError::Validation(
                "email address is malformed".into(),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const MAX_NAME_LENGTH: usize = 255;

/// A profile name field (first or last name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::Validation(format!(
                "name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The derived display handle, a slug generated from the profile names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("handle cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Handle> for String {
    fn from(value: Handle) -> Self {
        value.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

/// Password credential state of an account.
///
/// `Unusable` means no secret is set at all; password authentication must
/// fail without ever consulting the hasher. Stored as a nullable hash
/// column, NULL mapping to `Unusable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Usable(PasswordHash),
    Unusable,
}

impl Credential {
    pub fn usable(hash: PasswordHash) -> Self {
        Self::Usable(hash)
    }

    pub fn from_stored_hash(hash: Option<String>) -> DomainResult<Self> {
        match hash {
            Some(value) => Ok(Self::Usable(PasswordHash::new(value)?)),
            None => Ok(Self::Unusable),
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Usable(_))
    }

    pub fn hash(&self) -> Option<&PasswordHash> {
        match self {
            Self::Usable(hash) => Some(hash),
            Self::Unusable => None,
        }
    }
}
