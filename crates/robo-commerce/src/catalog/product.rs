//! Product type.

use crate::ids::{Category, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Image shown for products that have none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200x200?text=Robot";

/// An immutable catalogue entry.
///
/// Products are created when a catalogue is loaded and dropped when it is
/// replaced; nothing mutates them in between. Cart lines hold their own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Display name; also the search haystack.
    pub name: String,
    /// Unit price (non-negative).
    pub price: Money,
    /// Category slug.
    pub category: Category,
    /// Image reference or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a product without an image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            image: None,
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The image reference, or the placeholder when there is none.
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// An empty needle matches every product.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
