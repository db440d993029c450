pub mod delete_users_service;
pub mod list_users_service;
pub mod moderate_user_service;

pub use delete_users_service::DeleteUsersService;
pub use list_users_service::ListUsersService;
pub use moderate_user_service::ModerateUserService;
