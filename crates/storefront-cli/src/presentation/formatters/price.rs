use storefront_types::Money;

/// `$` followed by two-decimal fixed notation.
pub fn format_cents(cents: u64) -> String {
    Money::from_cents(cents).to_string()
}
