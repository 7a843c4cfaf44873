use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_superuser: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub handle: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.to_string(),
            is_active: user.is_active,
            is_admin: user.is_admin,
            is_superuser: user.is_superuser,
            first_name: user.first_name.map(|name| name.to_string()),
            last_name: user.last_name.map(|name| name.to_string()),
            handle: user.handle.map(|handle| handle.to_string()),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Fixed-shape read-only projection for the authentication/session layer.
///
/// Exactly these fields, nothing else: the credential never crosses this
/// boundary, in neither hashed nor usability form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_superuser: bool,
}

impl From<&User> for LoginData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.to_string(),
            is_active: user.is_active,
            is_admin: user.is_admin,
            is_superuser: user.is_superuser,
        }
    }
}
