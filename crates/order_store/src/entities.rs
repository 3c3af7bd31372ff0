use serde::{Deserialize, Serialize};

use base::entities::{OrderNumber, OrderStatusInfo, ShopId};
use base::errors::TrackerResult;
use status_api::OrderStatusApi;

pub type OrderName = String;

/// An order the user follows. Status fields stay empty until the first refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedOrder {
    shop: ShopId,
    order: OrderNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<OrderName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_info: Option<OrderStatusInfo>,
}

impl TrackedOrder {
    pub fn new(shop: ShopId, order: OrderNumber, name: Option<OrderName>) -> Self {
        Self {
            shop,
            order,
            name: name.filter(|name| !name.is_empty()),
            status_info: None,
        }
    }

    pub fn shop(&self) -> ShopId {
        self.shop
    }

    pub fn order(&self) -> OrderNumber {
        self.order
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status_info(&self) -> Option<&OrderStatusInfo> {
        self.status_info.as_ref()
    }

    pub fn display_name(&self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => self.order.to_string(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status_info
            .as_ref()
            .map_or(false, OrderStatusInfo::is_delivered)
    }

    /// On failure the previously fetched status is kept.
    pub fn refresh(&mut self, api: &impl OrderStatusApi) -> TrackerResult<()> {
        let status_info = api.get_order_status(self.shop, self.order)?;

        log::info!(
            "order {} of shop {} has status {}",
            self.display_name(),
            self.shop,
            status_info.status
        );

        self.status_info = Some(status_info);
        Ok(())
    }
}
