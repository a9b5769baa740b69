pub mod cart;
pub mod orders;

pub use cart::{CartError, CartService};
pub use orders::{OrderError, OrderService};
