//! A shopper's session: one cart plus one catalogue view.

use crate::cart::CartStore;
use crate::catalog::{CatalogueSource, CatalogueView};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Owns the cart and the catalogue view of a single session.
///
/// Views that need the cart borrow it from here; there is no shared global
/// cart.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    /// The session's cart.
    pub cart: CartStore,
    /// The session's catalogue view.
    pub catalogue: CatalogueView,
}

impl Storefront {
    /// Create a session with an empty catalogue.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: CartStore::new(currency),
            catalogue: CatalogueView::new(),
        }
    }

    /// Create a session over an already-built catalogue view.
    pub fn with_catalogue(currency: Currency, catalogue: CatalogueView) -> Self {
        Self {
            cart: CartStore::new(currency),
            catalogue,
        }
    }

    /// Load the catalogue from a source. See [`CatalogueView::load_catalogue`].
    pub async fn load_catalogue(&mut self, source: &dyn CatalogueSource) -> bool {
        self.catalogue.load_catalogue(source).await
    }

    /// Add a catalogue product to the cart by id.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<i64, CommerceError> {
        let product = self
            .catalogue
            .product(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        self.cart.add_to_cart(product)
    }

    /// Add the quick-view product to the cart and close the quick view.
    ///
    /// Returns `Ok(None)` when no quick view is open.
    pub fn add_quick_view_to_cart(&mut self) -> Result<Option<i64>, CommerceError> {
        let Some(product) = self.catalogue.quick_view() else {
            return Ok(None);
        };
        let quantity = self.cart.add_to_cart(product)?;
        self.catalogue.close_quick_view();
        Ok(Some(quantity))
    }

    /// Open the cart drawer.
    pub fn open_cart(&mut self) {
        self.cart.set_open(true);
    }

    /// Close the cart drawer.
    pub fn close_cart(&mut self) {
        self.cart.set_open(false);
    }
}
