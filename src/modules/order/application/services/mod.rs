pub mod accept_order_service;
pub mod advance_order_status_service;
pub mod assign_driver_service;
pub mod cancel_order_service;
pub mod deliver_order_service;
pub mod get_order_service;
pub mod list_orders_service;
pub mod place_order_service;
pub mod review_order_service;

pub use accept_order_service::AcceptOrderService;
pub use advance_order_status_service::AdvanceOrderStatusService;
pub use assign_driver_service::AssignDriverService;
pub use cancel_order_service::CancelOrderService;
pub use deliver_order_service::DeliverOrderService;
pub use get_order_service::GetOrderService;
pub use list_orders_service::ListOrdersService;
pub use place_order_service::PlaceOrderService;
pub use review_order_service::ReviewOrderService;
