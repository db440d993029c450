pub mod create_product_service;
pub mod delete_product_service;
pub mod list_vendor_products_service;
pub mod update_product_service;

pub use create_product_service::CreateProductService;
pub use delete_product_service::DeleteProductService;
pub use list_vendor_products_service::ListVendorProductsService;
pub use update_product_service::UpdateProductService;
