//! Price feed abstraction

use crate::core::quote::RawQuote;
use anyhow::Result;
use async_trait::async_trait;

/// A source of raw price quotes, read once when the form loads.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_quotes(&self) -> Result<Vec<RawQuote>>;
}
