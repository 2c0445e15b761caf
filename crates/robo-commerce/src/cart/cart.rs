//! Cart store and cart line types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product id this line is keyed by.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_mul(self.quantity)
    }
}

/// The shopping cart of one storefront session.
///
/// Holds at most one line per product id, in insertion order, plus the
/// visibility flag of the cart drawer. Item count and total are computed from
/// the lines every time they are asked for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
    is_open: bool,
    currency: Currency,
}

impl CartStore {
    /// Create an empty, closed cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            is_open: false,
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `product.id`, or appends a new line
    /// with quantity 1. Returns the line's quantity after the call.
    ///
    /// Fails only when the product is priced in a different currency than the
    /// cart.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<i64, CommerceError> {
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(
                product_id = %product.id,
                quantity = line.quantity,
                "cart line incremented"
            );
            return Ok(line.quantity);
        }

        self.lines.push(CartLine::new(product.clone()));
        tracing::debug!(product_id = %product.id, "cart line added");
        Ok(1)
    }

    /// Remove the line for a product. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product.id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(product_id = %product_id, "cart line removed");
        }
        removed
    }

    /// Set a line's quantity.
    ///
    /// Quantities below 1 are ignored rather than treated as a removal, and
    /// unknown ids are ignored. Returns whether a line changed.
    pub fn update_quantity(&mut self, product_id: &ProductId, new_quantity: i64) -> bool {
        if new_quantity < 1 {
            return false;
        }

        match self.lines.iter_mut().find(|l| &l.product.id == product_id) {
            Some(line) => {
                line.quantity = new_quantity;
                tracing::debug!(
                    product_id = %product_id,
                    quantity = new_quantity,
                    "cart line updated"
                );
                true
            }
            None => false,
        }
    }

    /// The drawer's `+` control.
    pub fn increment(&mut self, product_id: &ProductId) -> bool {
        match self.line(product_id) {
            Some(line) => {
                let next = line.quantity.saturating_add(1);
                self.update_quantity(product_id, next)
            }
            None => false,
        }
    }

    /// The drawer's `-` control. Clamps at 1; never removes the line.
    pub fn decrement(&mut self, product_id: &ProductId) -> bool {
        match self.line(product_id) {
            Some(line) => {
                let next = line.quantity - 1;
                self.update_quantity(product_id, next)
            }
            None => false,
        }
    }

    /// Empty the cart. The drawer state is left alone.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities.
    pub fn cart_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        Money::saturating_sum(self.lines.iter().map(CartLine::subtotal), self.currency)
    }

    /// Open or close the cart drawer.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if any.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot of the cart for display or serialization.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|l| LineSummary {
                    product_id: l.product.id.clone(),
                    name: l.product.name.clone(),
                    unit_price: l.product.price,
                    quantity: l.quantity,
                    subtotal: l.subtotal(),
                })
                .collect(),
            item_count: self.cart_count(),
            total: self.total(),
            is_open: self.is_open,
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
