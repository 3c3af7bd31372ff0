use std::cell::{Cell, RefCell};

use base::errors::TrackerResult;

use crate::orders::TrackedOrders;
use crate::storage::OrderStorage;

pub type NumberOfSaves = u32;

#[derive(Default)]
pub struct InMemoryOrderStorage {
    orders: RefCell<TrackedOrders>,
    number_of_saves: Cell<NumberOfSaves>,
}

impl InMemoryOrderStorage {
    pub fn new(orders: TrackedOrders) -> Self {
        Self {
            orders: RefCell::new(orders),
            number_of_saves: Cell::new(0),
        }
    }

    pub fn orders(&self) -> TrackedOrders {
        self.orders.borrow().clone()
    }

    pub fn number_of_saves(&self) -> NumberOfSaves {
        self.number_of_saves.get()
    }
}

impl OrderStorage for InMemoryOrderStorage {
    fn load(&self) -> TrackerResult<TrackedOrders> {
        Ok(self.orders.borrow().clone())
    }

    fn save(&self, orders: &TrackedOrders) -> TrackerResult<()> {
        *self.orders.borrow_mut() = orders.clone();
        self.number_of_saves.set(self.number_of_saves.get() + 1);
        Ok(())
    }
}
