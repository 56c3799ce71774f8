use serde::Serialize;
use storefront_types::{Category, Product, ProductId};
use tracing::debug;

use crate::{Cart, Catalog, RenderModel};

/// Visibility of the cart panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartPanel {
    #[default]
    Hidden,
    Shown,
}

impl CartPanel {
    pub fn toggled(self) -> Self {
        match self {
            CartPanel::Hidden => CartPanel::Shown,
            CartPanel::Shown => CartPanel::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == CartPanel::Shown
    }
}

/// Transient selections owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub selected_category: Category,
    pub cart_panel: CartPanel,
}

/// A user-originated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectCategory(Category),
    ToggleCart,
    CloseCart,
    AddToCart(Product),
    RemoveLine(ProductId),
    ChangeQuantity(ProductId, i64),
    IncrementLine(ProductId),
    DecrementLine(ProductId),
    /// "Proceed to Checkout". Accepted and ignored.
    Checkout,
}

/// Owns the cart and view state for one storefront session and answers every
/// intent with a fresh [`RenderModel`].
#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Catalog,
    cart: Cart,
    state: ViewState,
}

impl ViewController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            state: ViewState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies `intent` and returns the render model of the resulting state.
    pub fn dispatch(&mut self, intent: Intent) -> RenderModel {
        debug!(?intent, "dispatching intent");
        match intent {
            Intent::SelectCategory(category) => self.select_category(category),
            Intent::ToggleCart => self.toggle_cart(),
            Intent::CloseCart => self.close_cart(),
            Intent::AddToCart(product) => self.add_to_cart(&product),
            Intent::RemoveLine(id) => self.remove_line(id),
            Intent::ChangeQuantity(id, quantity) => self.change_quantity(id, quantity),
            Intent::IncrementLine(id) => self.cart.increment(id),
            Intent::DecrementLine(id) => self.cart.decrement(id),
            Intent::Checkout => debug!("checkout requested; nothing is bound to it"),
        }
        self.render()
    }

    /// No validation: a category no product carries yields an empty listing.
    pub fn select_category(&mut self, category: impl Into<Category>) {
        self.state.selected_category = category.into();
    }

    pub fn toggle_cart(&mut self) {
        self.state.cart_panel = self.state.cart_panel.toggled();
    }

    /// Explicit close control and backdrop clicks both land here.
    pub fn close_cart(&mut self) {
        self.state.cart_panel = CartPanel::Hidden;
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
    }

    pub fn remove_line(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    pub fn change_quantity(&mut self, id: ProductId, quantity: i64) {
        self.cart.set_quantity(id, quantity);
    }

    pub fn render(&self) -> RenderModel {
        let cart_lines = self.cart.lines().to_vec();
        RenderModel {
            categories: self.catalog.categories(),
            selected_category: self.state.selected_category.clone(),
            products: self
                .catalog
                .list_by_category(&self.state.selected_category)
                .into_iter()
                .cloned()
                .collect(),
            cart_empty: cart_lines.is_empty(),
            cart_lines,
            cart_item_count: self.cart.item_count(),
            cart_total: self.cart.total(),
            cart_panel_visible: self.state.cart_panel.is_visible(),
        }
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Catalog::fashion())
    }
}
