pub mod delete_users;
pub mod list_users;
pub mod moderate_user;

pub use delete_users::{DeleteUsersError, DeleteUsersUseCase};
pub use list_users::{ListUsersError, ListUsersQuery, ListUsersUseCase};
pub use moderate_user::{ModerateUserError, ModerateUserUseCase};
