// NOTE: storefront architecture
//
// The core (storefront-engine) is a pure state machine: intents in, render
// model out. Everything in this crate is the presentation shell around it.
//
// - Handlers own a ViewController and feed it intents
// - Presenters turn the engine's RenderModel into view models (raw data)
// - Renderers paint view models: console text, JSON, or the ratatui TUI
//
// Backdrop-vs-panel click scoping is a shell concern and lives in the TUI
// components; the controller only exposes close_cart().

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod intent;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, ViewModeArgs};
pub use commands::run;
