//! Shopping cart module.
//!
//! Contains the cart store, its lines, and the derived cart summary.

mod cart;
mod summary;

pub use cart::{CartLine, CartStore};
pub use summary::{CartSummary, LineSummary};
