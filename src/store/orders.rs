//! The signed-in user's order history, as last fetched.

use leptos::{create_rw_signal, RwSignal, SignalSet, SignalWith};

use crate::types::Order;

#[derive(Clone, Copy)]
pub struct OrdersSlice {
    orders: RwSignal<Vec<Order>>,
}

impl OrdersSlice {
    pub fn new() -> Self {
        Self {
            orders: create_rw_signal(Vec::new()),
        }
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        self.orders.set(orders);
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.with(Vec::clone)
    }

    pub fn clear(&self) {
        self.orders.set(Vec::new());
    }
}

impl Default for OrdersSlice {
    fn default() -> Self {
        Self::new()
    }
}
