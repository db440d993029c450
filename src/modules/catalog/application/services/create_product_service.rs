use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductError, CreateProductUseCase, ProductCommand,
};
use crate::catalog::application::ports::outgoing::{Product, ProductRepository};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct CreateProductService<P: ProductRepository, V: VendorRepository> {
    product_repository: P,
    vendor_repository: V,
}

impl<P: ProductRepository, V: VendorRepository> CreateProductService<P, V> {
    pub fn new(product_repository: P, vendor_repository: V) -> Self {
        Self {
            product_repository,
            vendor_repository,
        }
    }
}

#[async_trait]
impl<P: ProductRepository, V: VendorRepository> CreateProductUseCase
    for CreateProductService<P, V>
{
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        command: ProductCommand,
    ) -> Result<Product, CreateProductError> {
        let vendor = self
            .vendor_repository
            .find_by_user_id(vendor_user_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => CreateProductError::VendorNotFound,
                other => CreateProductError::RepositoryError(other.to_string()),
            })?;

        self.product_repository
            .insert(vendor.id, command.into_data())
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))
    }
}
