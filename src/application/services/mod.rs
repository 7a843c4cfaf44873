// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService,
        ports::{security::PasswordHasher, time::Clock, util::SlugGenerator},
        queries::users::UserQueryService,
    },
    domain::{
        slug::{SlugPrefixLookup, UniqueSlugService},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        handle_lookup: Arc<dyn SlugPrefixLookup>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(slugger));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            handle_lookup,
            password_hasher,
            slug_service,
            clock,
        ));
        let user_queries = Arc::new(UserQueryService::new(user_repo));

        Self {
            user_commands,
            user_queries,
        }
    }
}
