use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, GuidanceViewModel, ViewMode,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = &self.data.config.store;
        let tui = &self.data.config.tui;

        writeln!(f, "Config: {}", self.data.path)?;
        writeln!(f)?;
        writeln!(f, "[store]")?;
        writeln!(f, "  name           {}", store.name)?;
        writeln!(f, "  title          {}", store.title)?;
        writeln!(f, "  hero_title     {}", store.hero_title)?;
        writeln!(f, "  hero_subtitle  {}", store.hero_subtitle)?;
        writeln!(f, "  footer         {}", store.footer)?;
        writeln!(f, "[tui]")?;
        writeln!(f, "  tick_rate_ms   {}", tui.tick_rate_ms)?;
        writeln!(f, "  mouse          {}", tui.mouse)
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.written {
            writeln!(f, "Wrote {}", self.data.path)
        } else {
            writeln!(f, "Left {} untouched", self.data.path)
        }
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} - {} products in {} categories\n",
            self.data.store_name, self.data.product_count, self.data.category_count
        )?;
        writeln!(f, "Quick commands:")?;
        writeln!(f, "  storefront browse                 # Open the interactive store")?;
        writeln!(f, "  storefront catalog                # List products")?;
        writeln!(f, "  storefront categories             # List categories")?;
        writeln!(f, "  storefront replay add:1 toggle    # Fill a cart and print the page\n")?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  storefront --help")
    }
}
