// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, User, UserProfileUpdate};
pub use repository::{HANDLE_SLUG_FIELD, UserFilter, UserRepository};
pub use value_objects::{Credential, EmailAddress, Handle, PasswordHash, PersonName, UserId};
