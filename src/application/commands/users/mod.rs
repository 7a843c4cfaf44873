mod authenticate;
mod create;
mod service;
mod superuser;
mod update_profile;

pub use authenticate::AuthenticateUserCommand;
pub use create::CreateUserCommand;
pub use service::UserCommandService;
pub use superuser::CreateSuperuserCommand;
pub use update_profile::UpdateUserProfileCommand;
