use crate::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: String,
    /// Short glyph shown as the product picture
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
            description: description.into(),
        }
    }

    pub fn is_in(&self, category: &Category) -> bool {
        category.matches(self)
    }
}

/// Category filter. `All` is synthetic and matches every product.
///
/// Serialized as a plain string, `"All"` being reserved for the synthetic
/// category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub const ALL_LABEL: &'static str = "All";

    pub fn named(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => Self::ALL_LABEL,
            Category::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => product.category == *name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        if name == Self::ALL_LABEL {
            Category::All
        } else {
            Category::Named(name)
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::All => Category::ALL_LABEL.to_string(),
            Category::Named(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
