pub mod cart_store;
pub mod order_store;

pub use cart_store::{CartStore, MemoryCartStore, CART_KEY};
pub use order_store::{MemoryOrderStore, OrderStore};
