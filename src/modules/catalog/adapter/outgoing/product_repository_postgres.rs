use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    Product, ProductData, ProductRepository, ProductRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity as ProductEntity, Model};

#[derive(Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_product(model: Model) -> Result<Product, ProductRepositoryError> {
        model.to_product().ok_or_else(|| {
            ProductRepositoryError::DatabaseError("Unknown fuel type value".to_string())
        })
    }

    async fn find_model(&self, product_id: Uuid) -> Result<Model, ProductRepositoryError> {
        ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProductRepositoryError::NotFound)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list_active_for_vendor(
        &self,
        vendor_id: Uuid,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let rows = ProductEntity::find()
            .filter(Column::VendorId.eq(vendor_id))
            .filter(Column::Active.eq(true))
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::to_product).collect()
    }

    async fn find_by_id(&self, product_id: Uuid) -> Result<Product, ProductRepositoryError> {
        let model = self.find_model(product_id).await?;
        Self::to_product(model)
    }

    async fn insert(
        &self,
        vendor_id: Uuid,
        data: ProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            vendor_id: Set(vendor_id),
            name: Set(data.name),
            fuel_type: Set(data.fuel_type.as_str().to_string()),
            unit_price: Set(data.unit_price),
            stock_quantity: Set(data.stock_quantity),
            min_order_qty: Set(data.min_order_qty),
            max_order_qty: Set(data.max_order_qty),
            active: Set(data.active),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_product(inserted)
    }

    async fn update(
        &self,
        product_id: Uuid,
        data: ProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let found = self.find_model(product_id).await?;

        let mut active: ActiveModel = found.into();
        active.name = Set(data.name);
        active.fuel_type = Set(data.fuel_type.as_str().to_string());
        active.unit_price = Set(data.unit_price);
        active.stock_quantity = Set(data.stock_quantity);
        active.min_order_qty = Set(data.min_order_qty);
        active.max_order_qty = Set(data.max_order_qty);
        active.active = Set(data.active);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_product(updated)
    }

    async fn deactivate(&self, product_id: Uuid) -> Result<(), ProductRepositoryError> {
        let found = self.find_model(product_id).await?;

        let mut active: ActiveModel = found.into();
        active.active = Set(false);

        active
            .update(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn product_row(active: bool) -> Model {
        Model {
            id: Uuid::new_v4(),
            vendor_id: Uuid::new_v4(),
            name: "Diesel AGO".to_string(),
            fuel_type: "diesel".to_string(),
            unit_price: Decimal::new(89_500, 2),
            stock_quantity: 1000,
            min_order_qty: 10,
            max_order_qty: 500,
            active,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn list_active_maps_products() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![product_row(true)]])
            .into_connection();

        let repo = ProductRepositoryPostgres::new(Arc::new(db));
        let products = repo.list_active_for_vendor(Uuid::new_v4()).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Diesel AGO");
        assert_eq!(
            products[0].fuel_type,
            crate::catalog::application::domain::entities::FuelType::Diesel
        );
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let repo = ProductRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ProductRepositoryError::NotFound)));
    }
}
