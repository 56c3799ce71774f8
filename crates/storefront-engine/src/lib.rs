//! Storefront core: an immutable catalog, an in-memory cart and the view
//! controller that turns user intents into render models.
//!
//! Nothing in here performs I/O or fails. Every intent is total: unknown
//! categories list nothing, quantity changes on missing lines are ignored and
//! zero or negative quantities remove the line.

pub mod cart;
pub mod catalog;
pub mod controller;
pub mod render;

pub use cart::Cart;
pub use catalog::Catalog;
pub use controller::{CartPanel, Intent, ViewController, ViewState};
pub use render::RenderModel;

pub use storefront_types::{CartLine, Category, Money, Product, ProductId};
