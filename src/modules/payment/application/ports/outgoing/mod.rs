pub mod payment_repository;

pub use payment_repository::{PaymentRecord, PaymentRepository, PaymentRepositoryError};
