use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    ProductCommand, UpdateProductError, UpdateProductUseCase,
};
use crate::catalog::application::ports::outgoing::{
    Product, ProductRepository, ProductRepositoryError,
};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct UpdateProductService<P: ProductRepository, V: VendorRepository> {
    product_repository: P,
    vendor_repository: V,
}

impl<P: ProductRepository, V: VendorRepository> UpdateProductService<P, V> {
    pub fn new(product_repository: P, vendor_repository: V) -> Self {
        Self {
            product_repository,
            vendor_repository,
        }
    }
}

#[async_trait]
impl<P: ProductRepository, V: VendorRepository> UpdateProductUseCase
    for UpdateProductService<P, V>
{
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        product_id: Uuid,
        command: ProductCommand,
    ) -> Result<Product, UpdateProductError> {
        let vendor = self
            .vendor_repository
            .find_by_user_id(vendor_user_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => UpdateProductError::VendorNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })?;

        let product = self
            .product_repository
            .find_by_id(product_id)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => UpdateProductError::ProductNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })?;

        if product.vendor_id != vendor.id {
            return Err(UpdateProductError::NotOwner);
        }

        self.product_repository
            .update(product_id, command.into_data())
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => UpdateProductError::ProductNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::catalog::application::domain::entities::FuelType;
    use crate::catalog::application::ports::outgoing::ProductData;
    use crate::vendor::application::ports::outgoing::{
        UpdateVendorProfileData, VendorProfile, VendorSummary,
    };

    struct StubVendorRepo {
        vendor_id: Uuid,
    }

    #[async_trait]
    impl VendorRepository for StubVendorRepo {
        async fn find_by_user_id(
            &self,
            user_id: Uuid,
        ) -> Result<VendorProfile, VendorRepositoryError> {
            Ok(VendorProfile {
                id: self.vendor_id,
                user_id,
                business_name: "Lagos Fuels".to_string(),
                address: "12 Marina Rd".to_string(),
                description: String::new(),
                logo_path: None,
                verified: true,
                rating_avg: Decimal::ZERO,
                rating_count: 0,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<VendorProfile, VendorRepositoryError> {
            unimplemented!()
        }

        async fn list_verified(&self) -> Result<Vec<VendorSummary>, VendorRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _user_id: Uuid,
            _data: UpdateVendorProfileData,
        ) -> Result<VendorProfile, VendorRepositoryError> {
            unimplemented!()
        }

        async fn set_logo_path(
            &self,
            _user_id: Uuid,
            _logo_path: String,
        ) -> Result<VendorProfile, VendorRepositoryError> {
            unimplemented!()
        }
    }

    struct StubProductRepo {
        owner: Uuid,
    }

    fn product(id: Uuid, vendor_id: Uuid, data: ProductData) -> Product {
        Product {
            id,
            vendor_id,
            name: data.name,
            fuel_type: data.fuel_type,
            unit_price: data.unit_price,
            stock_quantity: data.stock_quantity,
            min_order_qty: data.min_order_qty,
            max_order_qty: data.max_order_qty,
            active: data.active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn default_data() -> ProductData {
        ProductData {
            name: "Diesel AGO".to_string(),
            fuel_type: FuelType::Diesel,
            unit_price: Decimal::new(89_500, 2),
            stock_quantity: 1000,
            min_order_qty: 10,
            max_order_qty: 500,
            active: true,
        }
    }

    #[async_trait]
    impl ProductRepository for StubProductRepo {
        async fn list_active_for_vendor(
            &self,
            _vendor_id: Uuid,
        ) -> Result<Vec<Product>, ProductRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, product_id: Uuid) -> Result<Product, ProductRepositoryError> {
            Ok(product(product_id, self.owner, default_data()))
        }

        async fn insert(
            &self,
            vendor_id: Uuid,
            data: ProductData,
        ) -> Result<Product, ProductRepositoryError> {
            Ok(product(Uuid::new_v4(), vendor_id, data))
        }

        async fn update(
            &self,
            product_id: Uuid,
            data: ProductData,
        ) -> Result<Product, ProductRepositoryError> {
            Ok(product(product_id, self.owner, data))
        }

        async fn deactivate(&self, _product_id: Uuid) -> Result<(), ProductRepositoryError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn owner_can_update_own_product() {
        let vendor_id = Uuid::new_v4();
        let service = UpdateProductService::new(
            StubProductRepo { owner: vendor_id },
            StubVendorRepo { vendor_id },
        );

        let command = ProductCommand::new(
            "Premium diesel".to_string(),
            FuelType::Diesel,
            Decimal::new(92_000, 2),
            800,
            10,
            400,
            true,
        )
        .unwrap();

        let updated = service
            .execute(Uuid::new_v4(), Uuid::new_v4(), command)
            .await
            .unwrap();
        assert_eq!(updated.name, "Premium diesel");
    }

    #[tokio::test]
    async fn foreign_product_is_rejected() {
        let service = UpdateProductService::new(
            StubProductRepo {
                owner: Uuid::new_v4(),
            },
            StubVendorRepo {
                vendor_id: Uuid::new_v4(),
            },
        );

        let command = ProductCommand::new(
            "Premium diesel".to_string(),
            FuelType::Diesel,
            Decimal::new(92_000, 2),
            800,
            10,
            400,
            true,
        )
        .unwrap();

        let result = service.execute(Uuid::new_v4(), Uuid::new_v4(), command).await;
        assert!(matches!(result, Err(UpdateProductError::NotOwner)));
    }
}
