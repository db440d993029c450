pub mod notification_repository_postgres;
pub mod realtime_hub;
pub mod sea_orm_entity;

pub use notification_repository_postgres::NotificationRepositoryPostgres;
pub use realtime_hub::RealtimeHub;
