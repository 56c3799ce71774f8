use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the fashion store and fill a cart from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml (defaults to the storefront config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive storefront
    Browse,

    /// Apply intents to a fresh storefront and print the resulting page
    Replay {
        #[arg(
            value_name = "INTENT",
            help = "category:<name> | toggle | close | add:<id> | remove:<id> | qty:<id>=<n> | inc:<id> | dec:<id> | checkout"
        )]
        intents: Vec<String>,

        #[arg(long, help = "Read more intents from a file, one per line")]
        file: Option<PathBuf>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// List catalog products
    Catalog {
        #[arg(long, default_value = "All")]
        category: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// List the category filter bar
    Categories,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all fields)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}
