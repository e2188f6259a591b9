//! Terminal front-end for the swap form

pub mod convert;
pub mod dialog;
pub mod quotes;
pub mod rate;
pub mod setup;
pub mod ui;

use crate::core::{CurrencyQuote, PriceList, SwapForm};
use anyhow::{Result, bail};

/// Finds a quote by its currency code.
pub(crate) fn lookup<'a>(list: &'a PriceList, currency: &str) -> Result<&'a CurrencyQuote> {
    match list.find(currency) {
        Some(quote) => Ok(quote),
        None => bail!("Unknown currency: {currency}"),
    }
}

pub(crate) fn ensure_ready(form: &SwapForm) -> Result<()> {
    if !form.is_ready() {
        bail!("Swap form is not ready: fewer than two quotes are available");
    }
    Ok(())
}
