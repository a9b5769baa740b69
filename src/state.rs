use std::sync::Arc;

use crate::catalog::{Catalog, StaticCatalog};
use crate::services::{CartService, OrderService};
use crate::store::{CartStore, MemoryCartStore, MemoryOrderStore, OrderStore};

/// Everything the routers need, wired once at startup. The catalog and
/// both stores are injected behind traits so a persistent backing store
/// can replace the in-memory ones without touching the services.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub cart: CartService,
    pub orders: OrderService,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        cart_store: Arc<dyn CartStore>,
        order_store: Arc<dyn OrderStore>,
    ) -> Self {
        let cart = CartService::new(catalog.clone(), cart_store);
        let orders = OrderService::new(order_store, cart.clone());
        Self {
            catalog,
            cart,
            orders,
        }
    }

    /// Default wiring: the stock catalog plus in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(StaticCatalog::with_default_products()),
            Arc::new(MemoryCartStore::new()),
            Arc::new(MemoryOrderStore::new()),
        )
    }
}
