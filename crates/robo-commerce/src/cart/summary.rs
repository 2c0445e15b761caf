//! Derived cart snapshot.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Point-in-time view of a cart, computed by [`CartStore::summary`].
///
/// Nothing here is fed back into the store; it exists for display and
/// serialization only.
///
/// [`CartStore::summary`]: crate::cart::CartStore::summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown in insertion order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of line subtotals.
    pub total: Money,
    /// Whether the drawer was open.
    pub is_open: bool,
}

impl CartSummary {
    /// Check if the summarized cart had no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Header text of the cart drawer, e.g. `Cart (3)`.
    pub fn heading(&self) -> String {
        format!("Cart ({})", self.item_count)
    }
}

/// One line of a [`CartSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Product id.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::Product;
    use crate::money::Currency;

    #[test]
    fn test_summary_matches_store() {
        let mut cart = CartStore::new(Currency::USD);
        let drone = Product::new(1u64, "Drone", Money::from_decimal(100.0, Currency::USD), "drones");
        let rover = Product::new(2u64, "Rover", Money::from_decimal(200.0, Currency::USD), "rovers");
        cart.add_to_cart(&drone).unwrap();
        cart.add_to_cart(&drone).unwrap();
        cart.add_to_cart(&rover).unwrap();

        let summary = cart.summary();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total.display(), "$400.00");
        assert_eq!(summary.lines[0].subtotal.amount_cents, 20000);
        assert_eq!(summary.lines[1].name, "Rover");
        assert_eq!(summary.heading(), "Cart (3)");
    }

    #[test]
    fn test_empty_summary_serializes() {
        let summary = CartStore::new(Currency::USD).summary();
        assert!(summary.is_empty());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["item_count"], 0);
        assert_eq!(json["total"]["amount_cents"], 0);
    }
}
