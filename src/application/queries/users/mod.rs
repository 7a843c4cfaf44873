mod list;
mod login_data;
mod service;

pub use list::ListUsersQuery;
pub use service::UserQueryService;
