pub mod create_product;
pub mod delete_product;
pub mod list_vendor_products;
pub mod product_command;
pub mod update_product;

pub use create_product::{CreateProductError, CreateProductUseCase};
pub use delete_product::{DeleteProductError, DeleteProductUseCase};
pub use list_vendor_products::{ListVendorProductsError, ListVendorProductsUseCase};
pub use product_command::{ProductCommand, ProductCommandError};
pub use update_product::{UpdateProductError, UpdateProductUseCase};
