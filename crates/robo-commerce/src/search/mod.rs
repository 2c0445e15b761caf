//! Search module.
//!
//! Contains the category filter and the combined filter/search predicate.

mod filter;
mod query;

pub use filter::CategoryFilter;
pub use query::CatalogueQuery;
