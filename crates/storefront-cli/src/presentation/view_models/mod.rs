pub mod catalog;
pub mod common;
pub mod config;
pub mod result;
pub mod storefront;

pub use catalog::{CatalogListViewModel, CategoryEntryViewModel, CategoryListViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigViewModel, GuidanceViewModel};
pub use result::CommandResultViewModel;
pub use storefront::{
    CartBadgeViewModel, CartLineViewModel, CartPanelViewModel, CategoryButtonViewModel,
    PageChromeViewModel, ProductCardViewModel, StorefrontViewModel,
};

use std::fmt;

/// Bridge from a view model (data) to its text view (layout).
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
