pub mod product_repository_postgres;
pub mod sea_orm_entity;

pub use product_repository_postgres::ProductRepositoryPostgres;
