//! Cart and catalogue domain types for the RoboShop storefront.
//!
//! This crate holds the only stateful logic of the storefront:
//!
//! - **Catalog**: Products, categories, catalogue sources, and the filter/search view
//! - **Cart**: The cart store with its lines, derived count, total and summary
//! - **Search**: Category filter and the combined filter/search predicate
//! - **Storefront**: A session owning one cart and one catalogue view
//!
//! # Example
//!
//! ```rust,ignore
//! use robo_commerce::prelude::*;
//!
//! let mut store = Storefront::new(Currency::USD);
//! store.load_catalogue(&StaticCatalogue::robotics()).await;
//!
//! store.catalogue.set_filter("drones");
//! store.catalogue.set_search("surv");
//! let visible: Vec<_> = store.catalogue.visible_products().collect();
//!
//! store.add_to_cart(&visible[0].id.clone())?;
//! println!("{}: {}", store.cart.summary().heading(), store.cart.total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{CatalogueSource, CatalogueView, Product, StaticCatalogue};

    // Cart
    pub use crate::cart::{CartLine, CartStore, CartSummary, LineSummary};

    // Search
    pub use crate::search::{CatalogueQuery, CategoryFilter};
}
