use crate::config::Config;
use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use storefront_engine::{Catalog, ViewController};
use tracing::debug;

/// Per-process state shared by the handlers.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };

        Ok(Self {
            config_path,
            config: OnceCell::new(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            debug!(path = %self.config_path.display(), "loading config");
            Ok(Config::load_from(&self.config_path)?)
        })
    }

    /// A fresh storefront session over the fixed catalog.
    pub fn controller(&self) -> ViewController {
        ViewController::new(Catalog::fashion())
    }
}
