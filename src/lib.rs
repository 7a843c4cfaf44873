//! Account-management core for web-application backends.
//!
//! The crate exposes the application services an HTTP layer would call:
//! user-account creation, authentication checks, profile updates with a
//! derived display handle, and the login-data projection consumed by the
//! session layer. Persistence is PostgreSQL via `sqlx`; every external
//! capability (repository, password hasher, clock, slugifier) sits behind a
//! trait so tests can run against in-memory fakes.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
