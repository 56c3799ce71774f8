mod catalog;
mod config;
mod storefront;

pub use catalog::{present_catalog, present_categories, present_product_card};
pub use config::{present_config, present_config_init, present_guidance};
pub use storefront::{present_replay, present_storefront};
