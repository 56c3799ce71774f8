use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use storefront_engine::{Catalog, Intent, ViewController};
use storefront_types::ProductId;
use tracing::{debug, info, warn};

use crate::config::{StoreConfig, TuiConfig};
use crate::presentation::presenters::present_storefront;
use crate::presentation::views::tui::{StorefrontAction, StorefrontComponent};

/// Interactive storefront. Owns the controller for the whole session and
/// applies every intent on the input thread, one at a time.
pub struct TuiRenderer {
    controller: ViewController,
    store: StoreConfig,
    tui: TuiConfig,
}

impl TuiRenderer {
    pub fn new(controller: ViewController, store: StoreConfig, tui: TuiConfig) -> Self {
        Self {
            controller,
            store,
            tui,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let guard = TerminalGuard {
            mouse: self.tui.mouse,
        };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.tui.mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Set up Ctrl+C handler to restore terminal
        let mouse = self.tui.mouse;
        ctrlc::set_handler(move || {
            restore_terminal(&mut io::stdout(), mouse);
            std::process::exit(0);
        })?;

        info!("storefront session started");
        let result = self.event_loop(&mut terminal);

        drop(guard);
        info!(
            items = self.controller.cart().item_count(),
            "storefront session ended"
        );

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.tui.tick_rate_ms.max(1));
        let mut component = StorefrontComponent::new();
        let mut model = present_storefront(&self.controller.render(), &self.store);

        loop {
            terminal.draw(|f| component.render(f, f.area(), &model))?;

            if !event::poll(tick_rate)? {
                continue;
            }

            let action = match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    component.handle_key(key, &model)
                }
                Event::Mouse(mouse) => component.handle_mouse(mouse, &model),
                _ => None,
            };

            let Some(action) = action else {
                continue;
            };
            debug!(?action, "tui action");

            if action == StorefrontAction::Quit {
                return Ok(());
            }

            if let Some(intent) = to_intent(action, self.controller.catalog()) {
                let render = self.controller.dispatch(intent);
                model = present_storefront(&render, &self.store);
            }
        }
    }
}

/// Restores the terminal on drop, early `?` returns included.
struct TerminalGuard {
    mouse: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout(), self.mouse);
    }
}

/// Best effort: the terminal may already be gone.
fn restore_terminal(out: &mut impl Write, mouse: bool) {
    if let Err(err) = disable_raw_mode() {
        debug!(%err, "failed to disable raw mode");
    }
    if mouse {
        let _ = execute!(out, DisableMouseCapture);
    }
    let _ = execute!(out, LeaveAlternateScreen, cursor::Show);
}

/// Turn a UI action into a controller intent. `Quit` and adds of products the
/// catalog does not carry have no intent.
pub(crate) fn to_intent(action: StorefrontAction, catalog: &Catalog) -> Option<Intent> {
    let intent = match action {
        StorefrontAction::SelectCategory(label) => Intent::SelectCategory(label.into()),
        StorefrontAction::ToggleCart => Intent::ToggleCart,
        StorefrontAction::CloseCart => Intent::CloseCart,
        StorefrontAction::AddToCart(id) => match catalog.get(ProductId(id)) {
            Some(product) => Intent::AddToCart(product.clone()),
            None => {
                warn!(id, "add requested for unknown product");
                return None;
            }
        },
        StorefrontAction::RemoveLine(id) => Intent::RemoveLine(ProductId(id)),
        StorefrontAction::IncrementLine(id) => Intent::IncrementLine(ProductId(id)),
        StorefrontAction::DecrementLine(id) => Intent::DecrementLine(ProductId(id)),
        StorefrontAction::Checkout => Intent::Checkout,
        StorefrontAction::Quit => return None,
    };
    Some(intent)
}
