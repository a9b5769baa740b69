use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::entities::cart::Cart;
use crate::entities::order::{Order, OrderItem, OrderStatus, ShippingAddress};
use crate::services::cart::{CartError, CartService};
use crate::store::OrderStore;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Cannot create order with empty cart")]
    EmptyCart,
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Builds immutable orders out of a finalized cart and answers order
/// queries. Creation and cart clearing are one contract: a successful
/// order always empties the cart that produced it.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    cart: CartService,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, cart: CartService) -> Self {
        Self { store, cart }
    }

    /// Snapshots the cart into a new `pending` order. The four totals are
    /// copied verbatim, never recomputed, so the order reflects exactly
    /// what the customer was quoted. The empty cart is persisted before
    /// the append; the append itself cannot fail, so either both steps
    /// happen or neither does, and a failed call leaves the stored cart
    /// untouched.
    pub fn create_order(
        &self,
        user_id: &str,
        cart: &Cart,
        shipping_address: ShippingAddress,
        payment_method: &str,
        payment_id: Option<String>,
    ) -> Result<Order, OrderError> {
        if cart.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let items = cart
            .items
            .iter()
            .map(|item| OrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.product.price,
                name: item.product.name.clone(),
            })
            .collect();

        let now = Utc::now();
        let order = Order {
            id: format!("order-{}", Uuid::new_v4()),
            user_id: user_id.to_owned(),
            items,
            shipping_address,
            payment_method: payment_method.to_owned(),
            payment_id,
            subtotal: cart.subtotal,
            tax: cart.tax,
            shipping: cart.shipping,
            total: cart.total,
            status: OrderStatus::Pending,
            tracking_number: None,
            created_at: now,
            updated_at: now,
        };

        self.cart.clear()?;
        self.store.insert(order.clone());
        Ok(order)
    }

    pub fn orders_for_user(&self, user_id: &str) -> Vec<Order> {
        self.store.find_by_user(user_id)
    }

    pub fn find_order(&self, order_id: &str) -> Option<Order> {
        self.store.find_by_id(order_id)
    }

    /// `None` signals an unknown order id; this is not an error.
    pub fn update_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        tracking_number: Option<String>,
    ) -> Option<Order> {
        self.store.update_status(order_id, status, tracking_number)
    }
}
