use std::thread;
use std::time::Duration;

use base::entities::{OrderNumber, ShopId};
use base::errors::{TrackerError, TrackerResult};
use status_api::OrderStatusApi;

use crate::entities::TrackedOrder;

pub type NumberOfRemovedOrders = usize;

/// Tracked orders in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedOrders {
    orders: Vec<TrackedOrder>,
}

impl From<Vec<TrackedOrder>> for TrackedOrders {
    fn from(orders: Vec<TrackedOrder>) -> Self {
        Self { orders }
    }
}

impl TrackedOrders {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedOrder> {
        self.orders.iter()
    }

    pub fn as_slice(&self) -> &[TrackedOrder] {
        &self.orders
    }

    pub fn find(&self, shop: ShopId, order: OrderNumber) -> Option<&TrackedOrder> {
        self.orders
            .iter()
            .find(|tracked| tracked.shop() == shop && tracked.order() == order)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&TrackedOrder> {
        self.orders
            .iter()
            .find(|tracked| tracked.display_name() == name)
    }

    /// Appends the order unless its shop/order pair or its display name is
    /// already tracked.
    pub fn add(&mut self, order: TrackedOrder) -> TrackerResult<()> {
        if let Some(existing) = self.find(order.shop(), order.order()) {
            return Err(TrackerError::DuplicateOrder {
                shop: order.shop(),
                order: order.order(),
                name: existing.display_name(),
            });
        }

        let name = order.display_name();
        if self.find_by_name(&name).is_some() {
            return Err(TrackerError::DuplicateName(name));
        }

        self.orders.push(order);
        Ok(())
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<TrackedOrder> {
        let index = self
            .orders
            .iter()
            .position(|tracked| tracked.display_name() == name)?;

        Some(self.orders.remove(index))
    }

    pub fn cleanup_delivered(&mut self) -> NumberOfRemovedOrders {
        let number_of_orders = self.orders.len();
        self.orders.retain(|tracked| !tracked.is_delivered());

        number_of_orders - self.orders.len()
    }

    /// Refreshes the orders one after another, sleeping `delay` between two
    /// requests. Stops at the first failed refresh.
    pub fn refresh_all<A, F>(
        &mut self,
        api: &A,
        delay: Duration,
        mut on_refreshed: F,
    ) -> TrackerResult<()>
    where
        A: OrderStatusApi,
        F: FnMut(&TrackedOrder),
    {
        for (i, order) in self.orders.iter_mut().enumerate() {
            if i > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }

            order.refresh(api)?;
            on_refreshed(order);
        }

        Ok(())
    }
}
