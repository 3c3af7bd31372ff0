pub mod entities;
pub mod in_memory_order_storage;
pub mod json_file_order_storage;
pub mod orders;
pub mod storage;

pub use crate::entities::TrackedOrder;
pub use crate::in_memory_order_storage::InMemoryOrderStorage;
pub use crate::json_file_order_storage::JsonFileOrderStorage;
pub use crate::orders::TrackedOrders;
pub use crate::storage::OrderStorage;
