//! Category helpers.

use crate::ids::Category;

/// Categories the storefront offers as filter buttons, in display order.
pub const STANDARD_CATEGORIES: [&str; 3] = ["drones", "rovers", "arms"];

/// Category assigned to catalogue records that carry none.
pub const UNCATEGORIZED: &str = "uncategorized";

impl Category {
    /// The standard filterable categories.
    pub fn standard() -> Vec<Category> {
        STANDARD_CATEGORIES.iter().copied().map(Category::from).collect()
    }

    /// The fallback category.
    pub fn uncategorized() -> Self {
        Category::new(UNCATEGORIZED)
    }

    /// Check if this is one of the standard categories.
    pub fn is_standard(&self) -> bool {
        STANDARD_CATEGORIES.contains(&self.as_str())
    }

    /// Human label: first character upper-cased (`drones` -> `Drones`).
    pub fn label(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
