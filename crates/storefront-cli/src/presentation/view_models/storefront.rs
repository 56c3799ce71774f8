use serde::Serialize;

/// Whole storefront page as the shell draws it.
///
/// Amounts are raw cents; views do the `$x.yy` formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontViewModel {
    pub page: PageChromeViewModel,
    pub cart_badge: CartBadgeViewModel,
    pub selected_category: String,
    pub filter_bar: Vec<CategoryButtonViewModel>,
    pub products: Vec<ProductCardViewModel>,
    pub cart_panel: CartPanelViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageChromeViewModel {
    pub store_name: String,
    pub title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartBadgeViewModel {
    pub item_count: u64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButtonViewModel {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardViewModel {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartPanelViewModel {
    pub visible: bool,
    pub empty: bool,
    pub lines: Vec<CartLineViewModel>,
    pub item_count: u64,
    pub total_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineViewModel {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
    pub subtotal_cents: u64,
}
