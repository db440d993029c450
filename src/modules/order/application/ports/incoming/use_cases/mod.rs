pub mod accept_order;
pub mod advance_order_status;
pub mod assign_driver;
pub mod cancel_order;
pub mod deliver_order;
pub mod get_order;
pub mod list_orders;
pub mod place_order;
pub mod review_order;

pub use accept_order::{AcceptOrderError, AcceptOrderUseCase};
pub use advance_order_status::{AdvanceOrderStatusError, AdvanceOrderStatusUseCase};
pub use assign_driver::{AssignDriverError, AssignDriverUseCase};
pub use cancel_order::{CancelOrderError, CancelOrderUseCase};
pub use deliver_order::{DeliverOrderError, DeliverOrderUseCase};
pub use get_order::{GetOrderError, GetOrderUseCase};
pub use list_orders::{ListOrdersError, ListOrdersUseCase};
pub use place_order::{
    OrderLine, PlaceOrderCommand, PlaceOrderCommandError, PlaceOrderError, PlaceOrderUseCase,
};
pub use review_order::{ReviewCommand, ReviewCommandError, ReviewOrderError, ReviewOrderUseCase};
