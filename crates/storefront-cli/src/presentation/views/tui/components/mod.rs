//! Stateful TUI components
//!
//! Components own their selection state and translate keys and clicks into
//! [`StorefrontAction`]s. They never touch the cart; the renderer turns each
//! action into a controller intent.

mod cart_panel;
mod product_list;
mod storefront;

pub use cart_panel::CartPanelComponent;
pub use product_list::ProductListComponent;
pub use storefront::StorefrontComponent;

/// Actions the storefront page emits to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontAction {
    SelectCategory(String),
    AddToCart(u32),
    ToggleCart,
    CloseCart,
    RemoveLine(u32),
    IncrementLine(u32),
    DecrementLine(u32),
    Checkout,
    Quit,
}

/// Keep `selected` inside `0..len`, selecting the first row when there is data.
pub(crate) fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    match selected {
        _ if len == 0 => None,
        Some(i) if i >= len => Some(len - 1),
        Some(i) => Some(i),
        None => Some(0),
    }
}
