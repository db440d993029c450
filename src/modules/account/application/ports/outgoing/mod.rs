pub mod account_repository;

pub use account_repository::{
    AccountRepository, AccountRepositoryError, ModerationTarget, UserListFilter, UserPage,
    UserSummary,
};
