mod catalog;
mod config;
mod storefront;
pub mod tui;

pub use storefront::StorefrontPageView;
