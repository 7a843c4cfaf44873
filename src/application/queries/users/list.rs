use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{EmailAddress, UserFilter, UserId},
};

#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserQueryService {
    /// Lists accounts matching every provided filter, ordered by id. The
    /// email filter goes through the same normalization stored addresses
    /// do, so lookups are case-insensitive.
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let filter = self.build_filter(query)?;
        let users = self.user_repo.list(&filter).await?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    fn build_filter(&self, query: ListUsersQuery) -> ApplicationResult<UserFilter> {
        let mut filter = UserFilter::default();
        if let Some(id) = query.id {
            filter.id = Some(UserId::new(id)?);
        }
        if let Some(email) = query.email {
            filter.email = Some(EmailAddress::new(email)?);
        }
        filter.is_admin = query.is_admin;

        Ok(filter)
    }
}
