use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{HANDLE_SLUG_FIELD, Handle, PersonName, UserId, UserProfileUpdate},
};

pub struct UpdateUserProfileCommand {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserCommandService {
    /// Applies the allow-listed profile fields, then recomputes the display
    /// handle from the resulting full name. The repository persists both in
    /// a single transaction.
    pub async fn update_profile(
        &self,
        command: UpdateUserProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let user_id = UserId::new(command.user_id)?;

        if command.first_name.is_none() && command.last_name.is_none() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let first_name = command.first_name.map(PersonName::new).transpose()?;
        let last_name = command.last_name.map(PersonName::new).transpose()?;

        let mut update = UserProfileUpdate::new(user_id, self.clock.now());
        let mut projected = user.clone();
        if let Some(first_name) = first_name {
            update = update.with_first_name(first_name.clone());
            projected.first_name = Some(first_name);
        }
        if let Some(last_name) = last_name {
            update = update.with_last_name(last_name.clone());
            projected.last_name = Some(last_name);
        }

        if let Some(full_name) = projected.full_name() {
            let handle = self.derive_handle(&user, &full_name).await?;
            update = update.with_handle(handle);
        }

        let updated = self.user_repo.update_profile(update).await?;
        Ok(updated.into())
    }

    async fn derive_handle(
        &self,
        user: &crate::domain::user::User,
        full_name: &str,
    ) -> ApplicationResult<Handle> {
        let current = user.handle.as_ref().map(|handle| handle.as_str());
        let lookup = self.handle_lookup.as_ref();

        let slug = self
            .slug_service
            .recompute(lookup, full_name, HANDLE_SLUG_FIELD, current)
            .await?;

        Ok(Handle::new(slug)?)
    }
}
