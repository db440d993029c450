mod delete_users;
mod get_users;
mod moderate_user;

pub use delete_users::{delete_users_handler, DeleteUsersDto};
pub use delete_users::__path_delete_users_handler;
pub use get_users::{get_users_handler, UserAdminView, UserPageView};
pub use get_users::__path_get_users_handler;
pub use moderate_user::{moderate_user_handler, ModerateUserDto};
pub use moderate_user::__path_moderate_user_handler;
