mod context;

pub mod browse;
pub mod catalog;
pub mod config;
pub mod guidance;
pub mod replay;

pub use context::HandlerContext;
