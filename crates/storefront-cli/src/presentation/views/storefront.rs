use std::fmt;

use crate::presentation::formatters::format_cents;
use crate::presentation::view_models::{
    CartPanelViewModel, CreateView, ProductCardViewModel, StorefrontViewModel, ViewMode,
};

impl CreateView for StorefrontViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StorefrontPageView::new(self, mode))
    }
}

/// Text rendition of the storefront page.
pub struct StorefrontPageView<'a> {
    data: &'a StorefrontViewModel,
    mode: ViewMode,
}

impl<'a> StorefrontPageView<'a> {
    pub fn new(data: &'a StorefrontViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for product in &self.data.products {
            writeln!(f, "{}", product.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} | {}",
            self.data.page.store_name, self.data.cart_badge.label
        )?;
        writeln!(f, "Categories: {}", self.filter_bar())?;
        for product in &self.data.products {
            writeln!(
                f,
                "#{} {} - {}",
                product.id,
                product.name,
                format_cents(product.price_cents)
            )?;
        }
        let panel = &self.data.cart_panel;
        writeln!(
            f,
            "Cart: {} item(s), total {} ({})",
            panel.item_count,
            format_cents(panel.total_cents),
            if panel.visible { "shown" } else { "hidden" }
        )
    }

    fn render_full(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = &self.data.page;
        let verbose = self.mode == ViewMode::Verbose;

        writeln!(f, "{}    {}", page.store_name, self.data.cart_badge.label)?;
        writeln!(f)?;
        writeln!(f, "{}", page.hero_title)?;
        writeln!(f, "{}", page.hero_subtitle)?;
        writeln!(f)?;
        writeln!(f, "{}", self.filter_bar())?;
        writeln!(f)?;

        if self.data.products.is_empty() {
            writeln!(f, "No products in {}", self.data.selected_category)?;
        }
        for product in &self.data.products {
            write_product_card(f, product, verbose)?;
        }

        // The panel only exists on screen while shown; verbose dumps it anyway.
        if self.data.cart_panel.visible || verbose {
            writeln!(f)?;
            write_cart_panel(f, &self.data.cart_panel, verbose)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", page.footer)
    }

    fn filter_bar(&self) -> String {
        self.data
            .filter_bar
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{}]", button.label)
                } else {
                    button.label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn write_product_card(
    f: &mut fmt::Formatter<'_>,
    product: &ProductCardViewModel,
    verbose: bool,
) -> fmt::Result {
    writeln!(
        f,
        "{} {}  {}  [Add to Cart]",
        product.image,
        product.name,
        format_cents(product.price_cents)
    )?;
    writeln!(f, "   {}", product.description)?;
    if verbose {
        writeln!(f, "   id: {}  category: {}", product.id, product.category)?;
    }
    Ok(())
}

fn write_cart_panel(
    f: &mut fmt::Formatter<'_>,
    panel: &CartPanelViewModel,
    verbose: bool,
) -> fmt::Result {
    if verbose {
        writeln!(
            f,
            "Shopping Cart ({})",
            if panel.visible { "shown" } else { "hidden" }
        )?;
    } else {
        writeln!(f, "Shopping Cart  [✕]")?;
    }

    if panel.empty {
        return writeln!(f, "  Your cart is empty");
    }

    for line in &panel.lines {
        writeln!(
            f,
            "  {} {}  {}  [-] {} [+]  [Remove]",
            line.image,
            line.name,
            format_cents(line.unit_price_cents),
            line.quantity
        )?;
        if verbose {
            writeln!(
                f,
                "     id: {}  subtotal: {}",
                line.id,
                format_cents(line.subtotal_cents)
            )?;
        }
    }
    writeln!(f, "  Total: {}", format_cents(panel.total_cents))?;
    writeln!(f, "  [Proceed to Checkout]")
}

impl<'a> fmt::Display for StorefrontPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_full(f),
        }
    }
}
