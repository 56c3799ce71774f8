use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub written: bool,
}

/// What `storefront` prints when run without a subcommand off a terminal.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub store_name: String,
    pub product_count: usize,
    pub category_count: usize,
}
