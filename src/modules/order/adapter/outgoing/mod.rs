pub mod order_repository_postgres;
pub mod sea_orm_entity;

pub use order_repository_postgres::OrderRepositoryPostgres;
