//! Filter/search view over a loaded catalogue.

use crate::catalog::{CatalogueSource, Product};
use crate::ids::{Category, ProductId};
use crate::search::{CatalogueQuery, CategoryFilter};

/// The catalogue as a shopper sees it.
///
/// Owns the product list, the active category filter, the search text and the
/// quick-view selection. The visible product set is always derived from these
/// on demand.
#[derive(Debug, Clone, Default)]
pub struct CatalogueView {
    products: Vec<Product>,
    query: CatalogueQuery,
    quick_view: Option<ProductId>,
}

impl CatalogueView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view over an existing product list.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Set the category filter. Any value is accepted.
    pub fn set_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.query.filter = filter.into();
    }

    /// Set the search text. Any value is accepted.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// The active category filter.
    pub fn filter(&self) -> &CategoryFilter {
        &self.query.filter
    }

    /// The current search text.
    pub fn search(&self) -> &str {
        &self.query.search
    }

    /// The combined filter and search.
    pub fn query(&self) -> &CatalogueQuery {
        &self.query
    }

    /// Products passing the current filter and search, in catalogue order.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.query.apply(&self.products)
    }

    /// The full product list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look a product up by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Replace the whole product list.
    ///
    /// A quick view pointing at a product that is gone is closed.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        if let Some(id) = &self.quick_view {
            if self.product(id).is_none() {
                self.quick_view = None;
            }
        }
    }

    /// Load the product list from a source.
    ///
    /// On success the list is replaced. On failure the error is logged and the
    /// existing list is kept. There is no retry. Returns whether the list was
    /// replaced.
    pub async fn load_catalogue(&mut self, source: &dyn CatalogueSource) -> bool {
        match source.fetch_products().await {
            Ok(products) => {
                tracing::info!(
                    source = %source.describe(),
                    products = products.len(),
                    "catalogue loaded"
                );
                self.replace_products(products);
                true
            }
            Err(err) => {
                tracing::error!(
                    source = %source.describe(),
                    error = %err,
                    kept = self.products.len(),
                    "error fetching products"
                );
                false
            }
        }
    }

    /// Open the quick view for a product. Ignored for ids not in the catalogue.
    pub fn open_quick_view(&mut self, id: &ProductId) -> bool {
        if self.product(id).is_some() {
            self.quick_view = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// Close the quick view.
    pub fn close_quick_view(&mut self) {
        self.quick_view = None;
    }

    /// The product currently shown in the quick view.
    pub fn quick_view(&self) -> Option<&Product> {
        self.quick_view.as_ref().and_then(|id| self.product(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalogue;
    use crate::error::CommerceError;
    use crate::money::{Currency, Money};
    use async_trait::async_trait;

    fn drone_and_rover() -> Vec<Product> {
        vec![
            Product::new(1u64, "Drone", Money::from_decimal(100.0, Currency::USD), "drones"),
            Product::new(2u64, "Rover", Money::from_decimal(200.0, Currency::USD), "rovers"),
        ]
    }

    fn visible_names(view: &CatalogueView) -> Vec<String> {
        view.visible_products().map(|p| p.name.clone()).collect()
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogueSource for FailingSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
            Err(CommerceError::Source {
                source_name: "failing".to_string(),
                message: "connection refused".to_string(),
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_defaults() {
        let view = CatalogueView::new();
        assert_eq!(view.filter(), &CategoryFilter::All);
        assert_eq!(view.search(), "");
        assert!(view.quick_view().is_none());
    }

    #[test]
    fn test_filter_drones() {
        let mut view = CatalogueView::with_products(drone_and_rover());
        view.set_filter("drones");
        view.set_search("");
        assert_eq!(visible_names(&view), vec!["Drone"]);
    }

    #[test]
    fn test_search_all_rov() {
        let mut view = CatalogueView::with_products(drone_and_rover());
        view.set_filter("all");
        view.set_search("rov");
        assert_eq!(visible_names(&view), vec!["Rover"]);
    }

    #[test]
    fn test_empty_catalogue_is_empty_view() {
        let mut view = CatalogueView::new();
        assert_eq!(view.visible_products().count(), 0);

        view.replace_products(drone_and_rover());
        view.set_filter("arms");
        assert_eq!(view.visible_products().count(), 0);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let view = CatalogueView::with_products(StaticCatalogue::robotics().products().to_vec());
        assert_eq!(view.categories(), Category::standard());
    }

    #[test]
    fn test_quick_view_lifecycle() {
        let mut view = CatalogueView::with_products(drone_and_rover());
        assert!(!view.open_quick_view(&ProductId::new("99")));
        assert!(view.quick_view().is_none());

        assert!(view.open_quick_view(&ProductId::new("2")));
        assert_eq!(view.quick_view().map(|p| p.name.as_str()), Some("Rover"));

        view.close_quick_view();
        assert!(view.quick_view().is_none());
    }

    #[test]
    fn test_replace_closes_stale_quick_view() {
        let mut view = CatalogueView::with_products(drone_and_rover());
        view.open_quick_view(&ProductId::new("2"));
        view.replace_products(drone_and_rover().into_iter().take(1).collect());
        assert!(view.quick_view().is_none());
    }

    #[tokio::test]
    async fn test_load_catalogue_replaces_products() {
        let mut view = CatalogueView::with_products(drone_and_rover());
        let loaded = view.load_catalogue(&StaticCatalogue::robotics()).await;
        assert!(loaded);
        assert_eq!(view.products().len(), 5);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_existing_list() {
        let mut view = CatalogueView::with_products(drone_and_rover());
        view.set_filter("rovers");

        let loaded = view.load_catalogue(&FailingSource).await;
        assert!(!loaded);
        assert_eq!(view.products(), drone_and_rover().as_slice());
        assert_eq!(visible_names(&view), vec!["Rover"]);
    }
}
