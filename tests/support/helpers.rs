// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use roster_core::application::services::ApplicationServices;

/// Wire the application services against the in-memory repository and the
/// forgiving password hasher.
pub fn build_services(repo: Arc<mocks::InMemoryUserRepo>) -> ApplicationServices {
    build_services_with_hasher(repo, Arc::new(mocks::DummyPasswordHasher))
}

/// Same wiring with a caller-chosen password hasher. The slug generator is
/// the real one so handle derivation behaves as in production.
pub fn build_services_with_hasher(
    repo: Arc<mocks::InMemoryUserRepo>,
    password_hasher: Arc<dyn roster_core::application::ports::security::PasswordHasher>,
) -> ApplicationServices {
    let user_repo: Arc<dyn roster_core::domain::user::repository::UserRepository> = repo.clone();
    let handle_lookup: Arc<dyn roster_core::domain::slug::SlugPrefixLookup> = repo;
    let clock: Arc<dyn roster_core::application::ports::time::Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn roster_core::application::ports::util::SlugGenerator> =
        Arc::new(roster_core::infrastructure::util::DefaultSlugGenerator::default());

    ApplicationServices::new(user_repo, handle_lookup, password_hasher, clock, slugger)
}
