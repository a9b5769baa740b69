use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::catalog::Catalog;
use crate::entities::cart::{Cart, CartItem};
use crate::store::{CartStore, CART_KEY};

#[derive(Error, Debug)]
pub enum CartError {
    #[error("No product with {0} id was found")]
    ProductNotFound(i32),
    #[error("No cart entry for product {0} was found")]
    ItemNotFound(i32),
    #[error("Quantity should be greater than 0")]
    InvalidQuantity,
    #[error("Failed to persist cart: {0}")]
    Storage(String),
}

/// Owns the session cart. Every mutation reprices the cart and persists
/// the full snapshot; reads never write.
#[derive(Clone)]
pub struct CartService {
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn CartStore>,
}

impl CartService {
    pub fn new(catalog: Arc<dyn Catalog>, store: Arc<dyn CartStore>) -> Self {
        Self { catalog, store }
    }

    /// The current cart, or the canonical empty cart when nothing is
    /// stored. A blob that fails to decode is discarded the same way; the
    /// cart is a cache of convenience, not a source of truth.
    pub fn get_cart(&self) -> Cart {
        let Some(blob) = self.store.load(CART_KEY) else {
            return Cart::empty();
        };
        match serde_json::from_str(&blob) {
            Ok(cart) => cart,
            Err(err) => {
                warn!(error = %err, "Discarding corrupt cart blob");
                Cart::empty()
            }
        }
    }

    /// Adds `quantity` of a product. An existing line is merged by
    /// incrementing its quantity; a new line embeds a snapshot of the
    /// product as the catalog currently describes it.
    pub fn add_item(&self, product_id: i32, quantity: u32) -> Result<Cart, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let product = self
            .catalog
            .find_by_id(product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;

        let mut cart = self.get_cart();
        match cart
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(entry) => entry.quantity += quantity,
            None => cart.items.push(CartItem {
                product_id,
                quantity,
                product,
            }),
        }

        cart.recompute();
        self.persist(&cart)?;
        Ok(cart)
    }

    /// Overwrites a line's quantity. Zero removes the line entirely; this
    /// is the removal mechanism, there is no separate remove operation.
    pub fn update_item_quantity(&self, product_id: i32, quantity: u32) -> Result<Cart, CartError> {
        let mut cart = self.get_cart();
        if !cart.items.iter().any(|item| item.product_id == product_id) {
            return Err(CartError::ItemNotFound(product_id));
        }

        if quantity == 0 {
            cart.items.retain(|item| item.product_id != product_id);
        } else if let Some(entry) = cart
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            entry.quantity = quantity;
        }

        cart.recompute();
        self.persist(&cart)?;
        Ok(cart)
    }

    /// Resets to the canonical empty cart.
    pub fn clear(&self) -> Result<Cart, CartError> {
        let cart = Cart::empty();
        self.persist(&cart)?;
        Ok(cart)
    }

    fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        let blob = serde_json::to_string(cart).map_err(|err| CartError::Storage(err.to_string()))?;
        self.store.save(CART_KEY, blob);
        Ok(())
    }
}
