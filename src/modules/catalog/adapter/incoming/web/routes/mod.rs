mod create_product;
mod delete_product;
mod get_vendor_products;
mod update_product;

pub use create_product::{create_product_handler, CreateProductDto};
pub use create_product::__path_create_product_handler;
pub use delete_product::delete_product_handler;
pub use delete_product::__path_delete_product_handler;
pub use get_vendor_products::{get_vendor_products_handler, ProductView};
pub use get_vendor_products::__path_get_vendor_products_handler;
pub use update_product::{update_product_handler, UpdateProductDto};
pub use update_product::__path_update_product_handler;
