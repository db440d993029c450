pub mod driver_repository_postgres;
pub mod sea_orm_entity;

pub use driver_repository_postgres::DriverRepositoryPostgres;
