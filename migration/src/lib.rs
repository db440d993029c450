pub use sea_orm_migration::prelude::*;

mod m20260310_000001_create_users_table;
mod m20260310_000002_create_vendors_table;
mod m20260310_000003_create_drivers_table;
mod m20260310_000004_create_products_table;
mod m20260310_000005_create_orders_tables;
mod m20260310_000006_create_payments_table;
mod m20260310_000007_create_reviews_table;
mod m20260310_000008_create_notifications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260310_000001_create_users_table::Migration),
            Box::new(m20260310_000002_create_vendors_table::Migration),
            Box::new(m20260310_000003_create_drivers_table::Migration),
            Box::new(m20260310_000004_create_products_table::Migration),
            Box::new(m20260310_000005_create_orders_tables::Migration),
            Box::new(m20260310_000006_create_payments_table::Migration),
            Box::new(m20260310_000007_create_reviews_table::Migration),
            Box::new(m20260310_000008_create_notifications_table::Migration),
        ]
    }
}
