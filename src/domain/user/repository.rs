use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserProfileUpdate},
    value_objects::{EmailAddress, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Name of the slug-bearing field in the users namespace, as understood by
/// the prefix-lookup capability the user repositories implement.
pub const HANDLE_SLUG_FIELD: &str = "handle";

/// Conjunctive exact-match filter for listing accounts. All fields optional.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub id: Option<UserId>,
    pub email: Option<EmailAddress>,
    pub is_admin: Option<bool>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Apply an allow-listed partial update. The direct field assignment and
    /// the recomputed handle must commit or fail together.
    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<User>;

    async fn promote_to_superuser(
        &self,
        id: UserId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<User>;

    /// List accounts matching the filter, ordered by id.
    async fn list(&self, filter: &UserFilter) -> DomainResult<Vec<User>>;
}
