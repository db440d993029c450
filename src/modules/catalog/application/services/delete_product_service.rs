use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    DeleteProductError, DeleteProductUseCase,
};
use crate::catalog::application::ports::outgoing::{ProductRepository, ProductRepositoryError};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct DeleteProductService<P: ProductRepository, V: VendorRepository> {
    product_repository: P,
    vendor_repository: V,
}

impl<P: ProductRepository, V: VendorRepository> DeleteProductService<P, V> {
    pub fn new(product_repository: P, vendor_repository: V) -> Self {
        Self {
            product_repository,
            vendor_repository,
        }
    }
}

#[async_trait]
impl<P: ProductRepository, V: VendorRepository> DeleteProductUseCase
    for DeleteProductService<P, V>
{
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        product_id: Uuid,
    ) -> Result<(), DeleteProductError> {
        let vendor = self
            .vendor_repository
            .find_by_user_id(vendor_user_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => DeleteProductError::VendorNotFound,
                other => DeleteProductError::RepositoryError(other.to_string()),
            })?;

        let product = self
            .product_repository
            .find_by_id(product_id)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => DeleteProductError::ProductNotFound,
                other => DeleteProductError::RepositoryError(other.to_string()),
            })?;

        if product.vendor_id != vendor.id {
            return Err(DeleteProductError::NotOwner);
        }

        self.product_repository
            .deactivate(product_id)
            .await
            .map_err(|e| DeleteProductError::RepositoryError(e.to_string()))
    }
}
