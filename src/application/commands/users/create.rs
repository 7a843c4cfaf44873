use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Credential, EmailAddress, NewUser, PasswordHash, User},
};

pub struct CreateUserCommand {
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub password: Option<String>,
}

impl CreateUserCommand {
    /// Creation defaults: active, not an admin, no usable password.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_active: true,
            is_admin: false,
            password: None,
        }
    }
}

impl UserCommandService {
    pub async fn create(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let user = self.insert_account(command).await?;
        Ok(user.into())
    }

    pub(super) async fn insert_account(
        &self,
        command: CreateUserCommand,
    ) -> ApplicationResult<User> {
        let email = EmailAddress::new(command.email)?;
        self.ensure_email_available(&email).await?;

        let credential = self.build_credential(command.password).await?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(
            email,
            credential,
            command.is_active,
            command.is_admin,
            created_at,
        );
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }

    async fn ensure_email_available(&self, email: &EmailAddress) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email address already in use"));
        }

        Ok(())
    }

    async fn build_credential(&self, password: Option<String>) -> ApplicationResult<Credential> {
        match password {
            Some(password) => {
                let hashed = self.password_hasher.hash(&password).await?;
                Ok(Credential::usable(PasswordHash::new(hashed)?))
            }
            None => Ok(Credential::Unusable),
        }
    }
}
