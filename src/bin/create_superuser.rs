// src/bin/create_superuser.rs
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_core::application::{
    commands::users::CreateSuperuserCommand,
    ports::{security::PasswordHasher, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use roster_core::config::AppConfig;
use roster_core::domain::{slug::SlugPrefixLookup, user::UserRepository};
use roster_core::infrastructure::{
    database, repositories::PostgresUserRepository, security::password::Argon2PasswordHasher,
    time::SystemClock, util::DefaultSlugGenerator,
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Creates the bootstrap superuser from `ADMIN_EMAIL` and the optional
/// `ADMIN_PASSWORD`. Intended for one-off provisioning of a fresh database.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let repo = Arc::new(PostgresUserRepository::new(pool));
    let user_repo: Arc<dyn UserRepository> = Arc::clone(&repo) as Arc<dyn UserRepository>;
    let handle_lookup: Arc<dyn SlugPrefixLookup> = repo;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services =
        ApplicationServices::new(user_repo, handle_lookup, password_hasher, clock, slugger);

    let email = config.admin_email()?.to_owned();
    let password = config.admin_password().map(str::to_owned);

    let user = services
        .user_commands
        .create_superuser(CreateSuperuserCommand { email, password })
        .await?;

    tracing::info!(user_id = user.id, email = %user.email, "superuser created");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
