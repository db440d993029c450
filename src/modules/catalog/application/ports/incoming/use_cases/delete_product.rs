use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProductError {
    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product belongs to another vendor")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes a product from the storefront. Soft: the row is kept for
/// existing order items.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        product_id: Uuid,
    ) -> Result<(), DeleteProductError>;
}
