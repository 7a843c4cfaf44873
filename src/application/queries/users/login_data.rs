use super::UserQueryService;
use crate::application::{
    dto::LoginData,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

impl UserQueryService {
    /// Fixed projection handed to the session layer. The shape never grows
    /// with the entity and the credential cannot cross this boundary.
    pub async fn login_data(&self, user_id: i64) -> ApplicationResult<LoginData> {
        let user_id = UserId::new(user_id)?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(LoginData::from(&user))
    }
}
