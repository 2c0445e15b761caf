//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Most cart and catalogue mutations are infallible by contract (invalid
/// quantities and unknown ids are no-ops), so this enum stays small.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalogue.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between a product and the cart.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Catalogue source failed to produce products.
    #[error("Catalogue source {source_name} failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },
}
