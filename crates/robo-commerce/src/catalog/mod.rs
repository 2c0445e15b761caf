//! Product catalogue module.
//!
//! Contains products, categories, the catalogue sources and the
//! filter/search view over a loaded catalogue.

mod category;
mod product;
mod source;
mod view;

pub use category::{STANDARD_CATEGORIES, UNCATEGORIZED};
pub use product::{Product, PLACEHOLDER_IMAGE};
pub use source::{CatalogueSource, StaticCatalogue};
pub use view::CatalogueView;
