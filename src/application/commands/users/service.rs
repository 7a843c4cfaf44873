use std::sync::Arc;

use crate::application::ports::{security::PasswordHasher, time::Clock};
use crate::domain::slug::{SlugPrefixLookup, UniqueSlugService};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) handle_lookup: Arc<dyn SlugPrefixLookup>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        handle_lookup: Arc<dyn SlugPrefixLookup>,
        password_hasher: Arc<dyn PasswordHasher>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            handle_lookup,
            password_hasher,
            slug_service,
            clock,
        }
    }
}
