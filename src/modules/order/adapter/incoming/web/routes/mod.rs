mod accept_order;
mod advance_order_status;
mod assign_driver;
mod cancel_order;
mod deliver_order;
mod get_order;
mod get_orders;
mod place_order;
mod review_order;

pub use accept_order::accept_order_handler;
pub use accept_order::__path_accept_order_handler;
pub use advance_order_status::{advance_order_status_handler, AdvanceOrderStatusDto};
pub use advance_order_status::__path_advance_order_status_handler;
pub use assign_driver::{assign_driver_handler, AssignDriverDto};
pub use assign_driver::__path_assign_driver_handler;
pub use cancel_order::cancel_order_handler;
pub use cancel_order::__path_cancel_order_handler;
pub use deliver_order::deliver_order_handler;
pub use deliver_order::__path_deliver_order_handler;
pub use get_order::get_order_handler;
pub use get_order::__path_get_order_handler;
pub use get_orders::get_orders_handler;
pub use get_orders::__path_get_orders_handler;
pub use place_order::{
    place_order_handler, OrderDetailView, OrderItemDto, OrderItemView, OrderView, PlaceOrderDto,
};
pub use place_order::__path_place_order_handler;
pub use review_order::{review_order_handler, ReviewOrderDto, ReviewedView};
pub use review_order::__path_review_order_handler;
