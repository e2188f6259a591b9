//! Conversion arithmetic between two quotes

use crate::core::quote::CurrencyQuote;

/// Rescales `amount` from the `from_price` basis to the `to_price` basis.
///
/// An empty amount stays empty. Prices are not validated: a zero or
/// non-finite price yields a non-finite result, passed through as-is.
pub fn convert(amount: Option<f64>, from_price: f64, to_price: f64) -> Option<f64> {
    amount.map(|a| (a / from_price) * to_price)
}

/// Describes how much of `to_symbol` one unit of `from_symbol` buys.
pub fn rate_description(
    from_symbol: &str,
    to_symbol: &str,
    from_price: f64,
    to_price: f64,
) -> String {
    let amount = (1.0 / from_price) * to_price;
    format!("1 {from_symbol} = {amount} {to_symbol}")
}

/// Describes a quote's price in dollars.
pub fn quote_description(quote: &CurrencyQuote) -> String {
    format!("1 {} = ${}", quote.currency, quote.price)
}

/// Reads a typed amount. Blank or non-numeric input, including `NaN` and
/// infinity spellings, is treated as empty.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Renders an optional amount, empty as the empty string.
pub fn format_amount(amount: Option<f64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_default()
}
