// tests/support/mocks/user_repo.rs
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use roster_core::domain::errors::{DomainError, DomainResult};
use roster_core::domain::slug::SlugPrefixLookup;
use roster_core::domain::user::{
    EmailAddress, HANDLE_SLUG_FIELD, NewUser, User, UserFilter, UserId, UserProfileUpdate,
    UserRepository,
};

/// インメモリのユーザーリポジトリ（ユニットテスト用）
///
/// 一意インデックス相当のチェック（email / handle）も再現する。
pub struct InMemoryUserRepo {
    inner: Mutex<Inner>,
}

struct Inner {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|user| i64::from(user.id))
            .max()
            .unwrap_or(0)
            + 1;
        let users = users
            .into_iter()
            .map(|user| (i64::from(user.id), user))
            .collect();
        Self {
            inner: Mutex::new(Inner { users, next_id }),
        }
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().users.get(&id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut inner = self.inner.lock().unwrap();

        let duplicate = inner
            .users
            .values()
            .any(|user| user.email.as_str() == new_user.email.as_str());
        if duplicate {
            return Err(DomainError::Conflict("email address already in use".into()));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id: UserId::new(id)?,
            email: new_user.email,
            credential: new_user.credential,
            is_active: new_user.is_active,
            is_admin: new_user.is_admin,
            is_superuser: false,
            first_name: None,
            last_name: None,
            handle: None,
            jwt_key: new_user.jwt_key,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .values()
            .find(|user| user.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.get(&i64::from(id)).cloned())
    }

    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<User> {
        let mut inner = self.inner.lock().unwrap();
        let id = i64::from(update.id);

        if let Some(handle) = &update.handle {
            let taken = inner.users.values().any(|user| {
                i64::from(user.id) != id
                    && user.handle.as_ref().map(|existing| existing.as_str())
                        == Some(handle.as_str())
            });
            if taken {
                return Err(DomainError::Conflict("handle already exists".into()));
            }
        }

        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(first_name) = update.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(handle) = update.handle {
            user.handle = Some(handle);
        }
        user.updated_at = update.updated_at;

        Ok(user.clone())
    }

    async fn promote_to_superuser(
        &self,
        id: UserId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<User> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner
            .users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        user.is_superuser = true;
        user.is_admin = true;
        user.updated_at = updated_at;

        Ok(user.clone())
    }

    async fn list(&self, filter: &UserFilter) -> DomainResult<Vec<User>> {
        let inner = self.inner.lock().unwrap();
        let mut users: Vec<User> = inner
            .users
            .values()
            .filter(|user| filter.id.is_none_or(|id| user.id == id))
            .filter(|user| {
                filter
                    .email
                    .as_ref()
                    .is_none_or(|email| user.email.as_str() == email.as_str())
            })
            .filter(|user| filter.is_admin.is_none_or(|is_admin| user.is_admin == is_admin))
            .cloned()
            .collect();
        users.sort_by_key(|user| i64::from(user.id));

        Ok(users)
    }
}

#[async_trait]
impl SlugPrefixLookup for InMemoryUserRepo {
    async fn slugs_with_prefix(&self, field: &str, prefix: &str) -> DomainResult<HashSet<String>> {
        if field != HANDLE_SLUG_FIELD {
            return Err(DomainError::Validation(format!(
                "unknown slug field: {field}"
            )));
        }

        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .values()
            .filter_map(|user| user.handle.as_ref())
            .map(|handle| handle.as_str().to_owned())
            .filter(|handle| handle.starts_with(prefix))
            .collect())
    }
}
