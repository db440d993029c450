pub mod product_repository;

pub use product_repository::{Product, ProductData, ProductRepository, ProductRepositoryError};
