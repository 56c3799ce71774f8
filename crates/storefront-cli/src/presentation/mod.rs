//! # Presentation Layer
//!
//! User interface of the storefront: console output and the interactive TUI.
//! It follows an adaptation of **MVVM (Model-View-ViewModel)** with
//! component-owned UI state for the TUI.
//!
//! ## Data Flow
//!
//! ### Console Output (JSON/Text):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!  (intents)        (Converter)        (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//!                                                                               (Layout)
//! ```
//!
//! ### Interactive TUI:
//!
//! ```text
//! [ ViewController ] --> [ Presenter ] --> [ ViewModel ] --> [ TuiRenderer (Router) ]
//!        ^                                                          |
//!        |                                                          v
//!        +------------- Intent <------ Action <------- [ Component ] <-- keys / clicks
//!                                                      (State + Logic)
//!                                                             |
//!                                                             v
//!                                                         [ View ]
//!                                                         (Widget)
//! ```
//!
//! ## Rules
//!
//! ### 1. Raw data in view models
//! Prices are cents (`price_cents: 2999`), never `"$29.99"`. JSON output is an
//! API; views do the formatting through `formatters`.
//!
//! ### 2. `ViewMode` is density
//! * **Minimal:** product ids only, for pipes
//! * **Compact:** one line per item
//! * **Standard:** the page as a shopper sees it
//! * **Verbose:** hidden fields too (ids, the closed cart)
//!
//! `--format json` ignores `ViewMode` and always dumps the full view model.
//!
//! ### 3. TUI components
//! * View models are read-only snapshots; selection and scroll live in the
//!   component that owns them.
//! * The renderer routes input to components and turns their actions into
//!   controller intents. It makes no decisions of its own.
//! * Components clamp selections against the data before every render.
//! * Clicks are scoped by the component that was drawn on top: a click the
//!   cart panel claims never reaches the backdrop.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
