pub mod users;

pub use users::{LoginData, UserDto};
