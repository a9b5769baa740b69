use chrono::Utc;
use std::sync::Mutex;

use crate::entities::order::{Order, OrderStatus};

/// Append-only order collection. Orders are inserted once at checkout and
/// never deleted; only status and tracking number change afterwards.
pub trait OrderStore: Send + Sync {
    fn insert(&self, order: Order);
    fn find_by_id(&self, id: &str) -> Option<Order>;
    /// All orders for a user in insertion order, oldest first.
    fn find_by_user(&self, user_id: &str) -> Vec<Order>;
    /// Returns `None` for an unknown id. A `None` tracking number keeps
    /// the existing one.
    fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
        tracking_number: Option<String>,
    ) -> Option<Order>;
}

pub struct MemoryOrderStore {
    orders: Mutex<Vec<Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for MemoryOrderStore {
    fn insert(&self, order: Order) {
        self.orders.lock().unwrap().push(order);
    }

    fn find_by_id(&self, id: &str) -> Option<Order> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|order| order.id == id)
            .cloned()
    }

    fn find_by_user(&self, user_id: &str) -> Vec<Order> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect()
    }

    fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
        tracking_number: Option<String>,
    ) -> Option<Order> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders.iter_mut().find(|order| order.id == id)?;
        order.status = status;
        if tracking_number.is_some() {
            order.tracking_number = tracking_number;
        }
        order.updated_at = Utc::now();
        Some(order.clone())
    }
}
