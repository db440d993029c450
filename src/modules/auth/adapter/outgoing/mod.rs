pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod token_blacklist_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use token_blacklist_redis::RedisTokenBlacklist;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
