use base::entities::{OrderNumber, OrderStatusInfo, ShopId};
use base::errors::TrackerResult;

pub trait OrderStatusApi {
    fn get_order_status(&self, shop: ShopId, order: OrderNumber)
        -> TrackerResult<OrderStatusInfo>;
}

impl<A: OrderStatusApi + ?Sized> OrderStatusApi for &A {
    fn get_order_status(
        &self,
        shop: ShopId,
        order: OrderNumber,
    ) -> TrackerResult<OrderStatusInfo> {
        (**self).get_order_status(shop, order)
    }
}
