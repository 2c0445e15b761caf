//! REST catalogue source.

use async_trait::async_trait;
use robo_commerce::catalog::{CatalogueSource, Product};
use robo_commerce::{Category, CommerceError, Currency, Money, ProductId};
use serde::Deserialize;

use crate::{FetchClient, FetchError, RecordError};

/// Catalogue endpoint used when none is configured.
pub const DEFAULT_CATALOGUE_ENDPOINT: &str = "http://localhost:8080/api/catalogue";

/// Record id as sent by the catalogue service: a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RecordId> for ProductId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Number(n) => ProductId::new(n.to_string()),
            RecordId::Text(s) => ProductId::new(s),
        }
    }
}

/// One product object of the catalogue response.
///
/// Only the fields the storefront uses are read; anything else in the object
/// is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogueRecord {
    /// Document-store id. Wins over `id` when both are sent.
    #[serde(rename = "_id", default)]
    pub document_id: Option<RecordId>,
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    /// Price in major currency units.
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogueRecord {
    /// Decode one element of the response array.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RecordError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Convert to a product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Result<Product, RecordError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(RecordError::InvalidPrice(self.price));
        }

        let id = self
            .document_id
            .or(self.id)
            .ok_or(RecordError::MissingId)?;

        let category = self
            .category
            .filter(|c| !c.is_empty())
            .map(Category::new)
            .unwrap_or_else(Category::uncategorized);

        let product = Product::new(
            ProductId::from(id),
            self.name,
            Money::from_decimal(self.price, currency),
            category,
        );

        Ok(match self.image.filter(|i| !i.is_empty()) {
            Some(image) => product.with_image(image),
            None => product,
        })
    }
}

/// Loads the catalogue with a single GET request.
///
/// No retry, no timeout beyond the client's own, no caching. The response
/// must be a JSON array; elements that do not convert to a product are
/// skipped one by one.
#[derive(Debug, Clone)]
pub struct HttpCatalogue {
    client: FetchClient,
    endpoint: String,
    currency: Currency,
}

impl HttpCatalogue {
    /// Create a source for `endpoint`, priced in USD.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new(),
            endpoint: endpoint.into(),
            currency: Currency::USD,
        }
    }

    /// Set the currency prices are interpreted in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Fetch the raw response array.
    pub async fn fetch_records(&self) -> Result<Vec<serde_json::Value>, FetchError> {
        self.client
            .get(&self.endpoint)
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    fn source_error(&self, err: FetchError) -> CommerceError {
        CommerceError::Source {
            source_name: self.endpoint.clone(),
            message: err.to_string(),
        }
    }
}

impl Default for HttpCatalogue {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOGUE_ENDPOINT)
    }
}

#[async_trait]
impl CatalogueSource for HttpCatalogue {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        let records = self
            .fetch_records()
            .await
            .map_err(|e| self.source_error(e))?;

        let mut products = Vec::with_capacity(records.len());
        for (index, value) in records.into_iter().enumerate() {
            match CatalogueRecord::from_value(value).and_then(|r| r.into_product(self.currency)) {
                Ok(product) => products.push(product),
                Err(err) => tracing::warn!(
                    index,
                    error = %err,
                    "skipping catalogue record"
                ),
            }
        }
        Ok(products)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(value: serde_json::Value) -> Result<Product, RecordError> {
        CatalogueRecord::from_value(value)?.into_product(Currency::USD)
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let drone =
            convert(json!({"id": 1, "name": "Drone", "price": 100, "category": "drones"})).unwrap();
        assert_eq!(drone.id, ProductId::new("1"));

        let rover = convert(json!({
            "_id": "64f0c2",
            "name": "Rover",
            "price": 200.5,
            "image": "/r.png"
        }))
        .unwrap();
        assert_eq!(rover.id.as_str(), "64f0c2");
        assert_eq!(rover.price.amount_cents, 20050);
        assert_eq!(rover.image.as_deref(), Some("/r.png"));
        assert_eq!(rover.category, Category::uncategorized());
    }

    #[test]
    fn test_document_id_wins_over_id() {
        let product =
            convert(json!({"_id": "64f", "id": 9, "name": "Drone", "price": 100})).unwrap();
        assert_eq!(product.id, ProductId::new("64f"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let arm =
            convert(json!({"id": 7, "name": "Arm", "price": 1, "sku": "ARM-7", "__v": 0})).unwrap();
        assert_eq!(arm.id, ProductId::new("7"));
    }

    #[test]
    fn test_empty_image_and_category_fall_back() {
        let product = convert(json!({"id": 2, "name": "X", "price": 3, "image": "", "category": null}))
            .unwrap();
        assert!(product.image.is_none());
        assert_eq!(product.category.as_str(), "uncategorized");
    }

    #[test]
    fn test_bad_records_are_rejected() {
        assert!(matches!(
            convert(json!({"id": 3, "name": "Broken", "price": -5})),
            Err(RecordError::InvalidPrice(_))
        ));
        assert!(matches!(
            convert(json!({"name": "Anonymous", "price": 5})),
            Err(RecordError::MissingId)
        ));
        assert!(matches!(
            convert(json!({"id": 3, "price": 5})),
            Err(RecordError::Malformed(_))
        ));
        assert!(matches!(convert(json!("drone")), Err(RecordError::Malformed(_))));
    }
}
