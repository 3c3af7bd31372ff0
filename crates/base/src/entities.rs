pub mod order;

pub use order::{OrderNumber, OrderStatusInfo, ShopId};

pub const DELIVERED_STATUS: &str = "DELIVERED";

/// Query configuration the vendor expects for consumer order lookups.
pub const DEFAULT_API_CONFIG: ApiConfig = 1320;

pub type ApiConfig = u32;

pub const DEFAULT_API_URL: &str = "https://spot.photoprintit.com/spotapi/orderInfo/forShop";
