//! Catalogue sources.

use async_trait::async_trait;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Anything that can produce a full product list.
///
/// A source is asked once per load; it has no notion of paging, caching or
/// retries.
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Fetch the complete product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Short description for logs (e.g. the endpoint URL).
    fn describe(&self) -> String;
}

/// A fixed, in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue {
    products: Vec<Product>,
}

impl StaticCatalogue {
    /// Wrap an existing product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in robotics line-up.
    pub fn robotics() -> Self {
        Self::robotics_in(Currency::USD)
    }

    /// The built-in robotics line-up priced in `currency`.
    pub fn robotics_in(currency: Currency) -> Self {
        let price = |amount: f64| Money::from_decimal(amount, currency);
        Self::new(vec![
            Product::new(1u64, "Autonomous Delivery Drone", price(2499.0), "drones")
                .with_image("/images/drone.png"),
            Product::new(2u64, "AI-Powered Mars Rover", price(3499.0), "rovers")
                .with_image("/images/rover.png"),
            Product::new(3u64, "Industrial Robotic Arm", price(5999.0), "arms")
                .with_image("/images/arm.png"),
            Product::new(4u64, "Surveillance Drone", price(1899.0), "drones")
                .with_image("/images/drone2.png"),
            Product::new(5u64, "Lunar Exploration Rover", price(4299.0), "rovers")
                .with_image("/images/rover2.png"),
        ])
    }

    /// The wrapped products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl CatalogueSource for StaticCatalogue {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static catalogue ({} products)", self.products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robotics_lineup() {
        let catalogue = StaticCatalogue::robotics();
        let products = catalogue.products();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].name, "Autonomous Delivery Drone");
        assert_eq!(products[2].price.display(), "$5999.00");
        assert_eq!(
            products.iter().filter(|p| p.category.as_str() == "drones").count(),
            2
        );
    }

    #[tokio::test]
    async fn test_static_fetch_returns_copy() {
        let catalogue = StaticCatalogue::robotics();
        let fetched = catalogue.fetch_products().await.unwrap();
        assert_eq!(fetched, catalogue.products());
    }
}
