pub mod account_repository_postgres;

pub use account_repository_postgres::AccountRepositoryPostgres;
