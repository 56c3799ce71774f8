use std::fmt;

/// Result type for storefront-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the storefront core
///
/// The catalog, cart and controller are total; these errors only surface at
/// the edges (configuration files, user-typed amounts and intents).
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration could not be read or written
    Config(String),

    /// A price string was not a two-decimal amount
    InvalidMoney(String),

    /// An intent string could not be parsed
    InvalidIntent(String),

    /// A product id is not part of the catalog
    UnknownProduct(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidMoney(input) => write!(f, "Invalid amount: '{}'", input),
            Error::InvalidIntent(msg) => write!(f, "Invalid intent: {}", msg),
            Error::UnknownProduct(id) => write!(f, "Unknown product id: {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::InvalidMoney(_)
            | Error::InvalidIntent(_)
            | Error::UnknownProduct(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
