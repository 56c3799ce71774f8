use std::collections::HashSet;

use storefront_types::{Category, Money, Product, ProductId};

/// Fixed, ordered product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog in definition order. A repeated id keeps its first
    /// definition.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let products = products
            .into_iter()
            .filter(|p| seen.insert(p.id))
            .collect();
        Self { products }
    }

    /// The clothing store's eight products.
    pub fn fashion() -> Self {
        Self::new(vec![
            Product::new(
                1,
                "Classic White T-Shirt",
                Money::from_cents(2999),
                "Tops",
                "👕",
                "Comfortable cotton t-shirt, perfect for everyday wear",
            ),
            Product::new(
                2,
                "Slim Fit Jeans",
                Money::from_cents(7999),
                "Bottoms",
                "👖",
                "Modern slim fit denim jeans with stretch",
            ),
            Product::new(
                3,
                "Summer Dress",
                Money::from_cents(5999),
                "Dresses",
                "👗",
                "Flowy summer dress in vibrant colors",
            ),
            Product::new(
                4,
                "Leather Jacket",
                Money::from_cents(19999),
                "Outerwear",
                "🧥",
                "Premium leather jacket for all seasons",
            ),
            Product::new(
                5,
                "Casual Sneakers",
                Money::from_cents(8999),
                "Footwear",
                "👟",
                "Comfortable sneakers for everyday activities",
            ),
            Product::new(
                6,
                "Wool Sweater",
                Money::from_cents(6999),
                "Tops",
                "🧶",
                "Cozy wool sweater for cold weather",
            ),
            Product::new(
                7,
                "Designer Handbag",
                Money::from_cents(14999),
                "Accessories",
                "👜",
                "Elegant handbag with multiple compartments",
            ),
            Product::new(
                8,
                "Baseball Cap",
                Money::from_cents(2499),
                "Accessories",
                "🧢",
                "Adjustable baseball cap in various colors",
            ),
        ])
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products of `category` in definition order. `All` lists everything; a
    /// category no product carries lists nothing.
    pub fn list_by_category(&self, category: &Category) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_in(category)).collect()
    }

    /// `All` followed by every distinct product category in first-appearance
    /// order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        let mut categories = vec![Category::All];
        for product in &self.products {
            if seen.insert(product.category.as_str()) {
                categories.push(Category::named(product.category.as_str()));
            }
        }
        categories
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fashion()
    }
}
