mod fetch_profile;
mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;

pub use fetch_profile::fetch_profile_handler;
pub use fetch_profile::__path_fetch_profile_handler;
pub use login_user::login_user_handler;
pub use login_user::__path_login_user_handler;
pub use logout_user::logout_user_handler;
pub use logout_user::__path_logout_user_handler;
pub use refresh_token::refresh_token_handler;
pub use refresh_token::__path_refresh_token_handler;
pub use register_user::register_user_handler;
pub use register_user::__path_register_user_handler;

pub use fetch_profile::UserProfileResponse;
pub use login_user::{LoginRequestDto, LoginResponse, LoginUserInfo};
pub use logout_user::{LogoutRequestDto, LogoutResponseBody};
pub use refresh_token::{RefreshTokenRequestDto, RefreshTokenResponseBody};
pub use register_user::{RegisterUserDto, RegisterUserResponse, RegisteredUser};
