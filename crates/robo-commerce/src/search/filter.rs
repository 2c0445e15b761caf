//! Category filter.

use crate::ids::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active category filter of a catalogue view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only products in this category pass.
    Only(Category),
}

impl CategoryFilter {
    /// Keyword that selects [`CategoryFilter::All`].
    pub const ALL: &'static str = "all";

    /// Parse a filter value; `"all"` (any case) means no category filter.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(Self::ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::new(value))
        }
    }

    /// The filter buttons of the storefront: `all` followed by the standard categories.
    pub fn standard_set() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::standard().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Check whether a category passes this filter.
    pub fn admits(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// The raw filter value (`all` or the category slug).
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Button label (`All`, `Drones`, ...).
    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
