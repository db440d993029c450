use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::Product;

use super::product_command::ProductCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        command: ProductCommand,
    ) -> Result<Product, CreateProductError>;
}
