use base::errors::TrackerResult;

use crate::orders::TrackedOrders;

pub trait OrderStorage {
    /// Returns no orders if nothing has been saved yet.
    fn load(&self) -> TrackerResult<TrackedOrders>;

    /// Replaces everything saved before.
    fn save(&self, orders: &TrackedOrders) -> TrackerResult<()>;
}
