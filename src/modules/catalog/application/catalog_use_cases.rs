use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, ListVendorProductsUseCase, UpdateProductUseCase,
};

/// Product catalog use cases wired into the application state.
#[derive(Clone)]
pub struct CatalogUseCases {
    pub list_products: Arc<dyn ListVendorProductsUseCase>,
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub update_product: Arc<dyn UpdateProductUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
}
