use crate::{Money, Product, ProductId};
use serde::{Deserialize, Serialize};

/// A product together with how many units of it are in the cart.
///
/// A line always has at least one unit; the cart drops lines instead of
/// keeping zero quantities around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}
