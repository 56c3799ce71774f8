use serde::Serialize;
use storefront_types::{CartLine, Money, Product, ProductId};
use tracing::trace;

/// Per-product quantities in the order products were first added.
///
/// At most one line per product id, and every line has a quantity of at
/// least one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`. An existing line keeps its position.
    pub fn add(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
                trace!(id = %product.id, quantity = line.quantity, "cart line incremented");
            }
            None => {
                self.lines.push(CartLine::new(product.clone()));
                trace!(id = %product.id, "cart line appended");
            }
        }
    }

    pub fn remove(&mut self, id: ProductId) {
        if let Some(idx) = self.position(id) {
            self.lines.remove(idx);
            trace!(%id, "cart line removed");
        }
    }

    /// Sets the quantity of an existing line. Zero or less removes the line;
    /// a missing line is left alone.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        if let Some(idx) = self.position(id) {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.lines[idx].quantity = quantity;
            trace!(%id, quantity, "cart line quantity set");
        }
    }

    /// The `+` control of a line.
    pub fn increment(&mut self, id: ProductId) {
        if let Some(line) = self.get(id) {
            let next = i64::from(line.quantity) + 1;
            self.set_quantity(id, next);
        }
    }

    /// The `-` control of a line; takes a single-unit line out of the cart.
    pub fn decrement(&mut self, id: ProductId) {
        if let Some(line) = self.get(id) {
            let next = i64::from(line.quantity) - 1;
            self.set_quantity(id, next);
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == id)
    }
}
