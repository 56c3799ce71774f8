use std::path::Path;

use storefront_engine::Catalog;

use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, GuidanceViewModel,
    StatusBadge,
};

pub fn present_config(path: &Path, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config: config.clone(),
    });

    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file; showing defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk").with_command("storefront config init"),
            );
    }

    result
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        written,
    };

    if written {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("Config written"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Config already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults")
                    .with_command("storefront config init --force"),
            )
    }
}

pub fn present_guidance(
    store_name: &str,
    catalog: &Catalog,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        store_name: store_name.to_string(),
        product_count: catalog.len(),
        // `All` is not a real category
        category_count: catalog.categories().len().saturating_sub(1),
    })
}
