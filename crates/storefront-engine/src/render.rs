use serde::Serialize;
use storefront_types::{CartLine, Category, Money, Product};

/// Snapshot of everything the presentation shell may show, taken after an
/// intent has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    pub categories: Vec<Category>,
    pub selected_category: Category,
    pub products: Vec<Product>,
    pub cart_lines: Vec<CartLine>,
    pub cart_item_count: u64,
    pub cart_total: Money,
    pub cart_panel_visible: bool,
    pub cart_empty: bool,
}

impl RenderModel {
    /// Header badge text, e.g. `🛒 Cart (3)`.
    pub fn cart_badge(&self) -> String {
        cart_badge(self.cart_item_count)
    }
}

pub fn cart_badge(item_count: u64) -> String {
    format!("🛒 Cart ({})", item_count)
}
