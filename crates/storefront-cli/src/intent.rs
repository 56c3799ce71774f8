//! Textual intents for `storefront replay`.
//!
//! ```text
//! category:<name>  toggle  close  add:<id>  remove:<id>
//! qty:<id>=<n>  inc:<id>  dec:<id>  checkout
//! ```

use std::str::FromStr;

use storefront_engine::{Catalog, Category, Intent, ProductId};
use storefront_types::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedIntent {
    SelectCategory(String),
    ToggleCart,
    CloseCart,
    Add(ProductId),
    Remove(ProductId),
    Quantity(ProductId, i64),
    Increment(ProductId),
    Decrement(ProductId),
    Checkout,
}

impl ParsedIntent {
    /// Binds the intent to catalog products. Only `add:` needs a catalog entry.
    pub fn resolve(self, catalog: &Catalog) -> Result<Intent> {
        Ok(match self {
            ParsedIntent::SelectCategory(name) => Intent::SelectCategory(Category::from(name)),
            ParsedIntent::ToggleCart => Intent::ToggleCart,
            ParsedIntent::CloseCart => Intent::CloseCart,
            ParsedIntent::Add(id) => {
                let product = catalog.get(id).ok_or(Error::UnknownProduct(id.0))?;
                Intent::AddToCart(product.clone())
            }
            ParsedIntent::Remove(id) => Intent::RemoveLine(id),
            ParsedIntent::Quantity(id, quantity) => Intent::ChangeQuantity(id, quantity),
            ParsedIntent::Increment(id) => Intent::IncrementLine(id),
            ParsedIntent::Decrement(id) => Intent::DecrementLine(id),
            ParsedIntent::Checkout => Intent::Checkout,
        })
    }
}

impl FromStr for ParsedIntent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        let parsed = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("toggle", None) => ParsedIntent::ToggleCart,
            ("close", None) => ParsedIntent::CloseCart,
            ("checkout", None) => ParsedIntent::Checkout,
            ("category", Some(name)) => ParsedIntent::SelectCategory(name.to_string()),
            ("add", Some(id)) => ParsedIntent::Add(parse_id(id)?),
            ("remove", Some(id)) => ParsedIntent::Remove(parse_id(id)?),
            ("inc", Some(id)) => ParsedIntent::Increment(parse_id(id)?),
            ("dec", Some(id)) => ParsedIntent::Decrement(parse_id(id)?),
            ("qty", Some(rest)) => {
                let (id, quantity) = rest.split_once('=').ok_or_else(|| {
                    Error::InvalidIntent(format!("expected qty:<id>=<n>, got '{}'", s))
                })?;
                let quantity = quantity.trim().parse::<i64>().map_err(|_| {
                    Error::InvalidIntent(format!("quantity '{}' is not an integer", quantity))
                })?;
                ParsedIntent::Quantity(parse_id(id)?, quantity)
            }
            _ => return Err(Error::InvalidIntent(format!("unrecognized intent '{}'", s))),
        };
        Ok(parsed)
    }
}

fn parse_id(raw: &str) -> Result<ProductId> {
    raw.trim()
        .parse::<u32>()
        .map(ProductId)
        .map_err(|_| Error::InvalidIntent(format!("'{}' is not a product id", raw)))
}

/// Parses an intent script: one intent per line, blank lines and `#`
/// comments skipped.
pub fn parse_script(text: &str) -> Result<Vec<ParsedIntent>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(lineno, line)| {
            line.parse::<ParsedIntent>().map_err(|e| match e {
                Error::InvalidIntent(msg) => Error::InvalidIntent(format!("line {}: {}", lineno, msg)),
                other => other,
            })
        })
        .collect()
}
