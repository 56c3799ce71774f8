//! Storefront Component (Page-level)
//!
//! Layout: [Header | Hero + Filter Bar | Products | Footer], with the cart
//! panel drawn over the right edge of the middle rows while it is shown.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
};

use super::{CartPanelComponent, ProductListComponent, StorefrontAction};
use crate::presentation::view_models::StorefrontViewModel;
use crate::presentation::views::tui::{FilterBarView, FooterView, HeaderView};

pub struct StorefrontComponent {
    product_list: ProductListComponent,
    cart_panel: CartPanelComponent,
    /// Cart badge as last drawn; clicking it toggles the cart
    badge_area: Rect,
    /// Category buttons as last drawn
    filter_buttons: Vec<(Rect, String)>,
}

impl StorefrontComponent {
    pub fn new() -> Self {
        Self {
            product_list: ProductListComponent::new(),
            cart_panel: CartPanelComponent::new(),
            badge_area: Rect::default(),
            filter_buttons: Vec::new(),
        }
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        model: &StorefrontViewModel,
    ) -> Option<StorefrontAction> {
        let cart_visible = model.cart_panel.visible;

        // Raw mode delivers Ctrl+C as a key, not a signal
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(StorefrontAction::Quit);
        }

        match key.code {
            KeyCode::Char('q') => return Some(StorefrontAction::Quit),
            KeyCode::Esc if cart_visible => return Some(StorefrontAction::CloseCart),
            KeyCode::Esc => return Some(StorefrontAction::Quit),
            KeyCode::Char('c') => return Some(StorefrontAction::ToggleCart),
            _ => {}
        }

        if cart_visible {
            return self.cart_panel.handle_input(key, &model.cart_panel);
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.cycle_category(model, -1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.cycle_category(model, 1),
            _ => self.product_list.handle_input(key, model),
        }
    }

    /// Left clicks only. While the cart is shown, a click outside the panel
    /// closes it and a click inside is left to the panel.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        model: &StorefrontViewModel,
    ) -> Option<StorefrontAction> {
        let MouseEventKind::Down(MouseButton::Left) = event.kind else {
            return None;
        };
        let position = Position::new(event.column, event.row);

        if model.cart_panel.visible {
            if let Some(panel) = self.cart_panel.panel_area()
                && panel.contains(position)
            {
                return self.cart_panel.handle_click(position, &model.cart_panel);
            }
            return Some(StorefrontAction::CloseCart);
        }

        if self.badge_area.contains(position) {
            return Some(StorefrontAction::ToggleCart);
        }

        if let Some((_, label)) = self
            .filter_buttons
            .iter()
            .find(|(area, _)| area.contains(position))
        {
            let label = label.clone();
            self.product_list.reset();
            return Some(StorefrontAction::SelectCategory(label));
        }

        self.product_list.handle_click(position, model)
    }

    pub fn render(&mut self, f: &mut Frame, size: Rect, model: &StorefrontViewModel) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Hero + filter bar
            Constraint::Min(3),    // Products
            Constraint::Length(3), // Footer
        ])
        .split(size);

        let header = HeaderView::new(model);
        self.badge_area = header.badge_area(chunks[0]);
        f.render_widget(header, chunks[0]);

        let filter_bar = FilterBarView::new(model);
        self.filter_buttons = filter_bar.button_areas(chunks[1]);
        f.render_widget(filter_bar, chunks[1]);
        self.product_list.render(f, chunks[2], model);
        f.render_widget(
            FooterView::new(&model.page.footer, model.cart_panel.visible),
            chunks[3],
        );

        if model.cart_panel.visible {
            let overlay = chunks[1].union(chunks[2]);
            self.cart_panel.render(f, overlay, &model.cart_panel);
        } else {
            self.cart_panel.hide();
        }
    }

    fn cycle_category(
        &mut self,
        model: &StorefrontViewModel,
        step: isize,
    ) -> Option<StorefrontAction> {
        let len = model.filter_bar.len();
        if len == 0 {
            return None;
        }
        let next = match model.filter_bar.iter().position(|b| b.active) {
            Some(current) => (current as isize + step).rem_euclid(len as isize) as usize,
            None => 0,
        };
        self.product_list.reset();
        Some(StorefrontAction::SelectCategory(
            model.filter_bar[next].label.clone(),
        ))
    }
}

impl Default for StorefrontComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::presentation::presenters::present_storefront;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use storefront_engine::{Intent, ViewController};
    use storefront_types::ProductId;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 30;

    fn model_of(controller: &ViewController) -> StorefrontViewModel {
        present_storefront(&controller.render(), &StoreConfig::default())
    }

    fn draw_buffer(component: &mut StorefrontComponent, model: &StorefrontViewModel) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal
            .draw(|f| component.render(f, f.area(), model))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(component: &mut StorefrontComponent, model: &StorefrontViewModel) -> String {
        let buffer = draw_buffer(component, model);
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    /// Top-most, left-most cell where `needle` is drawn, one char per cell.
    fn locate(buffer: &Buffer, needle: &str) -> (u16, u16) {
        let cells: Vec<String> = needle.chars().map(String::from).collect();
        let len = cells.len() as u16;
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width.saturating_sub(len - 1) {
                if cells
                    .iter()
                    .enumerate()
                    .all(|(i, cell)| buffer[(x + i as u16, y)].symbol() == cell)
                {
                    return (x, y);
                }
            }
        }
        panic!("'{}' is not on screen", needle);
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn add(controller: &mut ViewController, id: u32) {
        let product = controller.catalog().get(ProductId(id)).unwrap().clone();
        controller.dispatch(Intent::AddToCart(product));
    }

    #[test]
    fn test_renders_page_chrome() {
        let controller = ViewController::default();
        let model = model_of(&controller);
        let screen = draw(&mut StorefrontComponent::new(), &model);

        assert!(screen.contains("Fashion Store"));
        assert!(screen.contains("Clothing Store - Fashion for Everyone"));
        assert!(screen.contains("Welcome to Our Clothing Store"));
        assert!(screen.contains("Discover the latest trends in fashion"));
        assert!(screen.contains("Cart (0)"));
        assert!(screen.contains("Leather Jacket"));
        assert!(screen.contains("$199.99"));
        assert!(screen.contains("All rights reserved."));
        assert!(!screen.contains("Shopping Cart"));
    }

    #[test]
    fn test_renders_empty_cart_panel() {
        let mut controller = ViewController::default();
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let screen = draw(&mut StorefrontComponent::new(), &model);

        assert!(screen.contains("Shopping Cart"));
        assert!(screen.contains("Your cart is empty"));
        assert!(!screen.contains("Proceed to Checkout"));
    }

    #[test]
    fn test_renders_cart_lines_and_total() {
        let mut controller = ViewController::default();
        add(&mut controller, 1);
        add(&mut controller, 1);
        add(&mut controller, 2);
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let screen = draw(&mut StorefrontComponent::new(), &model);

        assert!(screen.contains("Cart (3)"));
        assert!(screen.contains("Total: $139.97"));
        assert!(screen.contains("Proceed to Checkout"));
        assert!(!screen.contains("Your cart is empty"));
    }

    #[test]
    fn test_enter_adds_selected_product() {
        let controller = ViewController::default();
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();

        assert_eq!(
            component.handle_key(key(KeyCode::Enter), &model),
            Some(StorefrontAction::AddToCart(1))
        );
        component.handle_key(key(KeyCode::Down), &model);
        component.handle_key(key(KeyCode::Char('j')), &model);
        assert_eq!(
            component.handle_key(key(KeyCode::Char('a')), &model),
            Some(StorefrontAction::AddToCart(3))
        );
    }

    #[test]
    fn test_arrows_cycle_categories() {
        let controller = ViewController::default();
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();

        assert_eq!(
            component.handle_key(key(KeyCode::Right), &model),
            Some(StorefrontAction::SelectCategory("Tops".to_string()))
        );
        assert_eq!(
            component.handle_key(key(KeyCode::Left), &model),
            Some(StorefrontAction::SelectCategory("Accessories".to_string()))
        );
    }

    #[test]
    fn test_escape_closes_cart_before_quitting() {
        let mut controller = ViewController::default();
        let mut component = StorefrontComponent::new();

        let closed = model_of(&controller);
        assert_eq!(
            component.handle_key(key(KeyCode::Esc), &closed),
            Some(StorefrontAction::Quit)
        );

        controller.dispatch(Intent::ToggleCart);
        let open = model_of(&controller);
        assert_eq!(
            component.handle_key(key(KeyCode::Esc), &open),
            Some(StorefrontAction::CloseCart)
        );
        assert_eq!(
            component.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &open),
            Some(StorefrontAction::Quit)
        );
    }

    #[test]
    fn test_cart_keys_target_selected_line() {
        let mut controller = ViewController::default();
        add(&mut controller, 4);
        add(&mut controller, 8);
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();

        assert_eq!(
            component.handle_key(key(KeyCode::Char('+')), &model),
            Some(StorefrontAction::IncrementLine(4))
        );
        component.handle_key(key(KeyCode::Down), &model);
        assert_eq!(
            component.handle_key(key(KeyCode::Char('-')), &model),
            Some(StorefrontAction::DecrementLine(8))
        );
        assert_eq!(
            component.handle_key(key(KeyCode::Char('d')), &model),
            Some(StorefrontAction::RemoveLine(8))
        );
        // Enter on a line does nothing; on the checkout row it checks out
        assert_eq!(component.handle_key(key(KeyCode::Enter), &model), None);
        component.handle_key(key(KeyCode::Down), &model);
        assert_eq!(
            component.handle_key(key(KeyCode::Enter), &model),
            Some(StorefrontAction::Checkout)
        );
    }

    #[test]
    fn test_click_inside_panel_keeps_it_open() {
        let mut controller = ViewController::default();
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        draw(&mut component, &model);

        let panel = component.cart_panel.panel_area().unwrap();
        let inside = click(panel.x + panel.width / 2, panel.y + panel.height / 2);
        assert_eq!(component.handle_mouse(inside, &model), None);

        let on_border = click(panel.x, panel.y + 1);
        assert_eq!(component.handle_mouse(on_border, &model), None);
    }

    #[test]
    fn test_click_outside_panel_closes_it() {
        let mut controller = ViewController::default();
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        draw(&mut component, &model);

        let panel = component.cart_panel.panel_area().unwrap();
        let outside = click(panel.x - 1, panel.y + 2);
        assert_eq!(
            component.handle_mouse(outside, &model),
            Some(StorefrontAction::CloseCart)
        );
    }

    #[test]
    fn test_click_close_mark_closes_panel() {
        let mut controller = ViewController::default();
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        let buffer = draw_buffer(&mut component, &model);

        let (x, y) = locate(&buffer, "✕");
        assert_eq!(
            component.handle_mouse(click(x, y), &model),
            Some(StorefrontAction::CloseCart)
        );
    }

    #[test]
    fn test_click_badge_toggles_cart() {
        let controller = ViewController::default();
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        draw(&mut component, &model);

        let badge = component.badge_area;
        assert_eq!(
            component.handle_mouse(click(badge.x + 1, badge.y), &model),
            Some(StorefrontAction::ToggleCart)
        );
        // Clicks elsewhere on the page do nothing while the cart is hidden
        assert_eq!(component.handle_mouse(click(2, HEIGHT / 2), &model), None);
    }

    #[test]
    fn test_click_filter_button_selects_category() {
        let controller = ViewController::default();
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        let buffer = draw_buffer(&mut component, &model);

        let (x, y) = locate(&buffer, "Tops");
        assert_eq!(
            component.handle_mouse(click(x, y), &model),
            Some(StorefrontAction::SelectCategory("Tops".to_string()))
        );
        // The padding around a label belongs to its button
        let (x, y) = locate(&buffer, "Accessories");
        assert_eq!(
            component.handle_mouse(click(x - 1, y), &model),
            Some(StorefrontAction::SelectCategory("Accessories".to_string()))
        );
        let (x, y) = locate(&buffer, "All");
        assert_eq!(
            component.handle_mouse(click(x, y), &model),
            Some(StorefrontAction::SelectCategory("All".to_string()))
        );
    }

    #[test]
    fn test_click_add_button_adds_that_product() {
        let controller = ViewController::default();
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        let buffer = draw_buffer(&mut component, &model);

        let (x, y) = locate(&buffer, "[Add to Cart]");
        assert_eq!(
            component.handle_mouse(click(x + 1, y), &model),
            Some(StorefrontAction::AddToCart(1))
        );
        assert_eq!(
            component.handle_mouse(click(x + 12, y + 3), &model),
            Some(StorefrontAction::AddToCart(4))
        );
    }

    #[test]
    fn test_click_product_text_selects_without_adding() {
        let controller = ViewController::default();
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        let buffer = draw_buffer(&mut component, &model);

        let (x, y) = locate(&buffer, "[Add to Cart]");
        assert_eq!(component.handle_mouse(click(x - 12, y + 1), &model), None);
        assert_eq!(
            component.handle_key(key(KeyCode::Enter), &model),
            Some(StorefrontAction::AddToCart(2))
        );
    }

    #[test]
    fn test_click_cart_line_controls() {
        let mut controller = ViewController::default();
        add(&mut controller, 1);
        add(&mut controller, 8);
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        let buffer = draw_buffer(&mut component, &model);

        let (x, y) = locate(&buffer, "[-]");
        assert_eq!(
            component.handle_mouse(click(x + 1, y), &model),
            Some(StorefrontAction::DecrementLine(1))
        );
        let (x, y) = locate(&buffer, "[+]");
        assert_eq!(
            component.handle_mouse(click(x + 1, y), &model),
            Some(StorefrontAction::IncrementLine(1))
        );
        let (x, y) = locate(&buffer, "[Remove]");
        assert_eq!(
            component.handle_mouse(click(x, y), &model),
            Some(StorefrontAction::RemoveLine(1))
        );
        // Same controls one row down act on the second line
        assert_eq!(
            component.handle_mouse(click(x + 7, y + 1), &model),
            Some(StorefrontAction::RemoveLine(8))
        );
    }

    #[test]
    fn test_click_cart_line_text_only_selects() {
        let mut controller = ViewController::default();
        add(&mut controller, 1);
        add(&mut controller, 8);
        controller.dispatch(Intent::ToggleCart);
        let model = model_of(&controller);
        let mut component = StorefrontComponent::new();
        let buffer = draw_buffer(&mut component, &model);

        let (x, y) = locate(&buffer, "[-]");
        // Unit price column of the second line
        assert_eq!(component.handle_mouse(click(x - 4, y + 1), &model), None);
        assert_eq!(
            component.handle_key(key(KeyCode::Char('+')), &model),
            Some(StorefrontAction::IncrementLine(8))
        );
    }
}
