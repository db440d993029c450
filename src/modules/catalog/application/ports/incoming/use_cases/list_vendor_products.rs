use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListVendorProductsError {
    #[error("Vendor not found")]
    VendorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Public catalog listing: active products of one vendor.
#[async_trait]
pub trait ListVendorProductsUseCase: Send + Sync {
    async fn execute(&self, vendor_id: Uuid) -> Result<Vec<Product>, ListVendorProductsError>;
}
