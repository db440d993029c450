use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    ListVendorProductsError, ListVendorProductsUseCase,
};
use crate::catalog::application::ports::outgoing::{Product, ProductRepository};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct ListVendorProductsService<P: ProductRepository, V: VendorRepository> {
    product_repository: P,
    vendor_repository: V,
}

impl<P: ProductRepository, V: VendorRepository> ListVendorProductsService<P, V> {
    pub fn new(product_repository: P, vendor_repository: V) -> Self {
        Self {
            product_repository,
            vendor_repository,
        }
    }
}

#[async_trait]
impl<P: ProductRepository, V: VendorRepository> ListVendorProductsUseCase
    for ListVendorProductsService<P, V>
{
    async fn execute(&self, vendor_id: Uuid) -> Result<Vec<Product>, ListVendorProductsError> {
        self.vendor_repository
            .find_by_id(vendor_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => ListVendorProductsError::VendorNotFound,
                other => ListVendorProductsError::RepositoryError(other.to_string()),
            })?;

        self.product_repository
            .list_active_for_vendor(vendor_id)
            .await
            .map_err(|e| ListVendorProductsError::RepositoryError(e.to_string()))
    }
}
