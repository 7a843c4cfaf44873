use super::{CreateUserCommand, UserCommandService};
use crate::application::{dto::UserDto, error::ApplicationResult};

pub struct CreateSuperuserCommand {
    pub email: String,
    pub password: Option<String>,
}

impl UserCommandService {
    /// Creates the account through the regular flow, then records the
    /// superuser promotion. Superusers always carry the admin flag too.
    pub async fn create_superuser(
        &self,
        command: CreateSuperuserCommand,
    ) -> ApplicationResult<UserDto> {
        let mut create = CreateUserCommand::new(command.email);
        create.is_admin = true;
        create.password = command.password;

        let user = self.insert_account(create).await?;
        let promoted = self
            .user_repo
            .promote_to_superuser(user.id, self.clock.now())
            .await?;

        Ok(promoted.into())
    }
}
