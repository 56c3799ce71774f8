use serde::Serialize;

use super::ProductCardViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListViewModel {
    pub category: String,
    pub products: Vec<ProductCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<CategoryEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntryViewModel {
    pub label: String,
    pub product_count: usize,
}
