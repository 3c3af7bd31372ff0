use serde::{Deserialize, Serialize};

use crate::entities::DELIVERED_STATUS;

pub type ShopId = u32;
pub type OrderNumber = u64;

pub type StatusCode = String;
pub type LastUpdate = String;
pub type PriceText = String;

/// Status fields reported by the vendor for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusInfo {
    pub status: StatusCode,
    pub last_update: LastUpdate,
    pub price: PriceText,
    pub order_no: OrderNumber,
}

impl OrderStatusInfo {
    pub fn is_delivered(&self) -> bool {
        self.status == DELIVERED_STATUS
    }
}
