pub mod price;
pub mod text;

pub use price::format_cents;
pub use text::truncate;
