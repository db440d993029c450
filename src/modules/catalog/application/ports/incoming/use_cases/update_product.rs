use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::Product;

use super::product_command::ProductCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductError {
    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product belongs to another vendor")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        product_id: Uuid,
        command: ProductCommand,
    ) -> Result<Product, UpdateProductError>;
}
