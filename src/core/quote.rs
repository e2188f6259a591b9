//! Price list types and normalization of the raw price feed

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Where per-currency icons live. `{currency}` is replaced by the currency code.
pub const DEFAULT_ICON_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/{currency}.svg?raw=true";

/// One entry of the price feed, as received. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

impl RawQuote {
    pub fn new(currency: &str, price: Option<f64>) -> Self {
        Self {
            currency: Some(currency.to_string()),
            price,
            date: None,
        }
    }
}

/// A currency paired with its price and a derived icon reference.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyQuote {
    pub currency: String,
    pub price: f64,
    pub icon_url: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CurrencyQuote {
    pub fn new(currency: &str, price: f64) -> Self {
        Self {
            currency: currency.to_string(),
            price,
            icon_url: icon_url(DEFAULT_ICON_URL_TEMPLATE, currency),
            updated_at: None,
        }
    }
}

/// Substitutes the currency code into an icon URL template.
pub fn icon_url(template: &str, currency: &str) -> String {
    template.replace("{currency}", currency)
}

/// Quotes unique by currency code, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceList {
    quotes: Vec<CurrencyQuote>,
}

impl PriceList {
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CurrencyQuote> {
        self.quotes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyQuote> {
        self.quotes.iter()
    }

    /// Looks up a quote by currency code. Codes are case-sensitive, as in the feed.
    pub fn find(&self, currency: &str) -> Option<&CurrencyQuote> {
        self.quotes.iter().find(|q| q.currency == currency)
    }
}

impl<'a> IntoIterator for &'a PriceList {
    type Item = &'a CurrencyQuote;
    type IntoIter = std::slice::Iter<'a, CurrencyQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

/// Normalizes raw feed entries using the default icon template.
pub fn normalize<I>(entries: I) -> PriceList
where
    I: IntoIterator<Item = RawQuote>,
{
    normalize_with_icons(entries, DEFAULT_ICON_URL_TEMPLATE)
}

/// Drops duplicate currencies (first occurrence wins) and entries without a
/// price, attaching an icon URL built from `icon_template` to each survivor.
pub fn normalize_with_icons<I>(entries: I, icon_template: &str) -> PriceList
where
    I: IntoIterator<Item = RawQuote>,
{
    let mut seen = HashSet::new();
    let mut quotes = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let (Some(currency), Some(price)) = (entry.currency, entry.price) else {
            skipped += 1;
            continue;
        };
        if !seen.insert(currency.clone()) {
            skipped += 1;
            continue;
        }

        let updated_at = entry
            .date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .map(|d| d.with_timezone(&Utc));

        quotes.push(CurrencyQuote {
            icon_url: icon_url(icon_template, &currency),
            currency,
            price,
            updated_at,
        });
    }

    debug!(accepted = quotes.len(), skipped, "Normalized price feed");
    PriceList { quotes }
}

/// Parses a raw feed body and normalizes it. The body must be a JSON array.
pub fn normalize_json(body: &str, icon_template: &str) -> Result<PriceList> {
    let entries: Vec<RawQuote> =
        serde_json::from_str(body).context("Price feed is not a JSON array of quotes")?;
    Ok(normalize_with_icons(entries, icon_template))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &PriceList) -> Vec<&str> {
        list.iter().map(|q| q.currency.as_str()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let list = normalize(vec![
            RawQuote::new("A", Some(1.0)),
            RawQuote::new("B", Some(2.0)),
            RawQuote::new("A", Some(9.0)),
        ]);

        assert_eq!(codes(&list), vec!["A", "B"]);
        assert_eq!(list.find("A").unwrap().price, 1.0);
        assert_eq!(list.find("B").unwrap().price, 2.0);
    }

    #[test]
    fn test_priceless_entries_are_dropped() {
        let list = normalize(vec![
            RawQuote::new("A", None),
            RawQuote::new("B", Some(4.0)),
            RawQuote::new("A", Some(2.0)),
            RawQuote {
                currency: None,
                price: Some(3.0),
                date: None,
            },
        ]);

        // A price-less entry does not reserve its currency code
        assert_eq!(codes(&list), vec!["B", "A"]);
        assert_eq!(list.find("A").unwrap().price, 2.0);
    }

    #[test]
    fn test_output_is_unique_by_currency() {
        let raw: Vec<RawQuote> = ["X", "Y", "X", "Z", "Y", "X"]
            .iter()
            .enumerate()
            .map(|(i, c)| RawQuote::new(c, Some(i as f64 + 1.0)))
            .collect();
        let list = normalize(raw);

        let unique: HashSet<_> = list.iter().map(|q| &q.currency).collect();
        assert_eq!(unique.len(), list.len());
        assert_eq!(codes(&list), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_icon_url_is_derived_from_template() {
        let list = normalize(vec![RawQuote::new("ETH", Some(1645.9))]);
        assert_eq!(
            list.get(0).unwrap().icon_url,
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/ETH.svg?raw=true"
        );

        let list = normalize_with_icons(
            vec![RawQuote::new("ETH", Some(1645.9))],
            "http://icons.local/{currency}.png",
        );
        assert_eq!(list.get(0).unwrap().icon_url, "http://icons.local/ETH.png");
    }

    #[test]
    fn test_normalize_json_keeps_dates_and_ignores_extra_fields() {
        let body = r#"[
            {"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.20811525423728813},
            {"currency": "bNEO", "date": "not a date", "price": 7.1282679, "chain": "neo"},
            {"currency": "USD", "date": "2023-08-29T07:10:30.000Z", "price": null}
        ]"#;

        let list = normalize_json(body, DEFAULT_ICON_URL_TEMPLATE).unwrap();
        assert_eq!(codes(&list), vec!["BLUR", "bNEO"]);

        let blur = list.find("BLUR").unwrap();
        assert_eq!(
            blur.updated_at.unwrap().to_rfc3339(),
            "2023-08-29T07:10:40+00:00"
        );
        assert!(list.find("bNEO").unwrap().updated_at.is_none());
    }

    #[test]
    fn test_normalize_json_rejects_non_array() {
        let err = normalize_json(r#"{"currency": "A", "price": 1}"#, DEFAULT_ICON_URL_TEMPLATE)
            .unwrap_err();
        assert!(err.to_string().contains("not a JSON array"));
    }

    #[test]
    fn test_empty_feed() {
        let list = normalize(Vec::new());
        assert!(list.is_empty());
        assert!(list.find("A").is_none());
    }
}
