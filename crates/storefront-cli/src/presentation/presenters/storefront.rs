use storefront_engine::RenderModel;

use super::present_product_card;
use crate::config::StoreConfig;
use crate::presentation::view_models::{
    CartBadgeViewModel, CartLineViewModel, CartPanelViewModel, CategoryButtonViewModel,
    CommandResultViewModel, Guidance, PageChromeViewModel, StatusBadge, StorefrontViewModel,
};

/// Maps the controller's render model onto the page layout.
pub fn present_storefront(model: &RenderModel, store: &StoreConfig) -> StorefrontViewModel {
    let filter_bar = model
        .categories
        .iter()
        .map(|category| CategoryButtonViewModel {
            label: category.label().to_string(),
            active: *category == model.selected_category,
        })
        .collect();

    let lines = model
        .cart_lines
        .iter()
        .map(|line| CartLineViewModel {
            id: line.product.id.0,
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            unit_price_cents: line.product.price.cents(),
            quantity: line.quantity,
            subtotal_cents: line.subtotal().cents(),
        })
        .collect();

    StorefrontViewModel {
        page: PageChromeViewModel {
            store_name: store.name.clone(),
            title: store.title.clone(),
            hero_title: store.hero_title.clone(),
            hero_subtitle: store.hero_subtitle.clone(),
            footer: store.footer.clone(),
        },
        cart_badge: CartBadgeViewModel {
            item_count: model.cart_item_count,
            label: model.cart_badge(),
        },
        selected_category: model.selected_category.label().to_string(),
        filter_bar,
        products: model.products.iter().map(present_product_card).collect(),
        cart_panel: CartPanelViewModel {
            visible: model.cart_panel_visible,
            empty: model.cart_empty,
            lines,
            item_count: model.cart_item_count,
            total_cents: model.cart_total.cents(),
        },
    }
}

pub fn present_replay(
    model: &RenderModel,
    store: &StoreConfig,
    intents_applied: usize,
) -> CommandResultViewModel<StorefrontViewModel> {
    let content = present_storefront(model, store);
    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::info(format!(
        "Applied {} intent(s)",
        intents_applied
    )));

    if model.products.is_empty() {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "No products in category '{}'",
                model.selected_category
            )))
            .with_suggestion(
                Guidance::new("List the available categories").with_command("storefront categories"),
            );
    }

    result
}
