pub mod cart;
pub mod error;
pub mod money;
pub mod product;

pub use cart::CartLine;
pub use error::{Error, Result};
pub use money::Money;
pub use product::{Category, Product, ProductId};
