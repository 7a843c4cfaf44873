use std::sync::Arc;

use crate::domain::user::UserRepository;

/// Read side of the account module. Everything here projects stored rows
/// into DTOs and never touches credentials.
pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}
