use super::UserCommandService;
use crate::{
    application::{
        dto::LoginData,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, User},
};

pub struct AuthenticateUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Checks a password credential and returns the login projection.
    /// Unknown addresses, inactive accounts, unusable credentials and
    /// wrong passwords all fail with the same unauthorized error.
    pub async fn authenticate(
        &self,
        command: AuthenticateUserCommand,
    ) -> ApplicationResult<LoginData> {
        let email = EmailAddress::new(command.email)?;
        let user = self.find_and_verify_user(&email, &command.password).await?;

        Ok(LoginData::from(&user))
    }

    async fn find_and_verify_user(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }

        let hash = user
            .credential
            .hash()
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher.verify(password, hash.as_str()).await?;

        Ok(user)
    }
}
