use super::{ensure_ready, lookup, ui};
use crate::core::{ConversionState, PriceList, SwapForm, quote_description, rate_description};
use anyhow::Result;

/// Prints current dollar prices and the exchange rate between two currencies.
pub fn run(list: &PriceList, form: SwapForm, from: &str, to: &str) -> Result<()> {
    ensure_ready(&form)?;
    let form = form
        .select_from(lookup(list, from)?.clone())
        .select_to(lookup(list, to)?.clone());

    if let Some(state) = form.state() {
        println!("{}", render(state));
    }
    Ok(())
}

pub fn render(state: &ConversionState) -> String {
    let mut lines = vec![
        ui::style_text("Current Rates:", ui::StyleType::Label),
        quote_description(&state.from),
        quote_description(&state.to),
        String::new(),
        ui::style_text("Reference Price:", ui::StyleType::Label),
    ];
    lines.push(rate_description(
        &state.from.currency,
        &state.to.currency,
        state.from.price,
        state.to.price,
    ));
    lines.join("\n")
}
