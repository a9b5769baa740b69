use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::entities::product::Product;

pub const TAX_RATE: Decimal = dec!(0.07);
pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(50.00);
pub const SHIPPING_FEE: Decimal = dec!(5.99);

/// One cart line: quantity plus the product as it looked when added.
/// At most one entry per product id in a cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i32,
    pub quantity: u32,
    pub product: Product,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The session's in-progress selection plus derived pricing. The derived
/// fields are never set directly, only through `recompute`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl Cart {
    /// The canonical empty cart: no items, all derived fields zero.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            shipping: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Reapplies the pricing formula to the current items. Shipping is
    /// waived only when the subtotal strictly exceeds the threshold, so a
    /// subtotal of exactly 50.00 still pays the flat fee. Values keep full
    /// precision; rounding happens at display time, not here.
    pub fn recompute(&mut self) {
        self.subtotal = self
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc + item.line_total());
        self.tax = self.subtotal * TAX_RATE;
        self.shipping = if self.subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            SHIPPING_FEE
        };
        self.total = self.subtotal + self.tax + self.shipping;
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}
