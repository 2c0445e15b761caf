//! Combined filter/search predicate.

use crate::catalog::Product;
use crate::search::CategoryFilter;
use serde::{Deserialize, Serialize};

/// A category filter plus a free-text search string.
///
/// The two axes compose independently: a product is visible when it passes
/// the category filter and its name contains the search text, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueQuery {
    /// Active category filter.
    pub filter: CategoryFilter,
    /// Search text; empty matches everything.
    pub search: String,
}

impl CatalogueQuery {
    /// Create a query with no filter and no search text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn with_filter(mut self, filter: impl Into<CategoryFilter>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Check whether a product is visible under this query.
    pub fn matches(&self, product: &Product) -> bool {
        self.filter.admits(&product.category) && product.name_contains(&self.search)
    }

    /// Lazily select the visible products, preserving catalogue order.
    pub fn apply<'a>(
        &'a self,
        products: &'a [Product],
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| self.matches(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalogue() -> Vec<Product> {
        vec![
            Product::new(1u64, "Drone", Money::from_decimal(100.0, Currency::USD), "drones"),
            Product::new(2u64, "Rover", Money::from_decimal(200.0, Currency::USD), "rovers"),
        ]
    }

    fn names<'a>(it: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        it.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_matches_everything() {
        let products = catalogue();
        let query = CatalogueQuery::new();
        assert_eq!(names(query.apply(&products)), vec!["Drone", "Rover"]);
    }

    #[test]
    fn test_filter_only() {
        let products = catalogue();
        let query = CatalogueQuery::new().with_filter("drones");
        assert_eq!(names(query.apply(&products)), vec!["Drone"]);
    }

    #[test]
    fn test_search_only() {
        let products = catalogue();
        let query = CatalogueQuery::new().with_filter("all").with_search("rov");
        assert_eq!(names(query.apply(&products)), vec!["Rover"]);
    }

    #[test]
    fn test_filter_and_search_compose() {
        let products = catalogue();
        let query = CatalogueQuery::new().with_filter("drones").with_search("rov");
        assert!(query.apply(&products).next().is_none());
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let products = catalogue();
        let query = CatalogueQuery::new().with_filter("arms");
        assert_eq!(query.apply(&products).count(), 0);
    }
}
