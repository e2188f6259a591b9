//! The swap form: which quotes are selected and what the typed amount converts to.
//!
//! Every transition consumes the current form and returns the next one, so a
//! caller always holds exactly one consistent value.
use crate::core::conversion::{convert, parse_amount};
use crate::core::quote::{CurrencyQuote, PriceList};
use std::fmt::Display;
use tracing::{debug, warn};

/// Which of the two selection slots an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::From => "From",
                Side::To => "To",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionState {
    pub from: CurrencyQuote,
    pub to: CurrencyQuote,
    pub amount_in: Option<f64>,
    pub amount_out: Option<f64>,
}

impl ConversionState {
    fn new(from: CurrencyQuote, to: CurrencyQuote, amount_in: Option<f64>) -> Self {
        let amount_out = convert(amount_in, from.price, to.price);
        if amount_out.is_some_and(|v| !v.is_finite()) {
            warn!(
                from = %from.currency,
                to = %to.currency,
                from_price = from.price,
                "Conversion produced a non-finite amount"
            );
        }
        Self {
            from,
            to,
            amount_in,
            amount_out,
        }
    }

    pub fn selected(&self, side: Side) -> &CurrencyQuote {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SwapForm {
    /// No price list with two usable quotes has been loaded.
    #[default]
    Uninitialized,
    Ready(ConversionState),
}

impl SwapForm {
    /// Seeds the selection from the first two quotes of the list.
    pub fn initialize(list: &PriceList) -> Self {
        match (list.get(0), list.get(1)) {
            (Some(from), Some(to)) => {
                debug!(from = %from.currency, to = %to.currency, "Swap form ready");
                SwapForm::Ready(ConversionState::new(from.clone(), to.clone(), None))
            }
            _ => {
                debug!(quotes = list.len(), "Not enough quotes to seed the swap form");
                SwapForm::Uninitialized
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SwapForm::Ready(_))
    }

    pub fn state(&self) -> Option<&ConversionState> {
        match self {
            SwapForm::Ready(state) => Some(state),
            SwapForm::Uninitialized => None,
        }
    }

    pub fn select(self, side: Side, quote: CurrencyQuote) -> Self {
        self.transition(|s| match side {
            Side::From => ConversionState::new(quote, s.to, s.amount_in),
            Side::To => ConversionState::new(s.from, quote, s.amount_in),
        })
    }

    pub fn select_from(self, quote: CurrencyQuote) -> Self {
        self.select(Side::From, quote)
    }

    pub fn select_to(self, quote: CurrencyQuote) -> Self {
        self.select(Side::To, quote)
    }

    /// Exchanges the two selections and recomputes from the swapped prices.
    pub fn swap(self) -> Self {
        self.transition(|s| ConversionState::new(s.to, s.from, s.amount_in))
    }

    /// Stores the typed amount. Blank or non-numeric input clears both amounts.
    pub fn set_amount_in(self, input: &str) -> Self {
        self.set_amount(parse_amount(input))
    }

    pub fn set_amount(self, amount: Option<f64>) -> Self {
        self.transition(|s| ConversionState::new(s.from, s.to, amount))
    }

    /// A dropdown view over `items` bound to one selection slot.
    pub fn dropdown<'a>(&'a self, side: Side, items: &'a PriceList) -> QuoteDropdown<'a> {
        QuoteDropdown {
            side,
            items,
            selected: self.state().map(|s| s.selected(side)),
        }
    }

    fn transition(self, f: impl FnOnce(ConversionState) -> ConversionState) -> Self {
        match self {
            SwapForm::Ready(state) => SwapForm::Ready(f(state)),
            SwapForm::Uninitialized => {
                debug!("Ignoring action on an uninitialized swap form");
                SwapForm::Uninitialized
            }
        }
    }
}

/// What a currency picker needs: the options and the current choice.
#[derive(Debug, Clone, Copy)]
pub struct QuoteDropdown<'a> {
    side: Side,
    items: &'a PriceList,
    selected: Option<&'a CurrencyQuote>,
}

impl<'a> QuoteDropdown<'a> {
    pub fn label(&self) -> String {
        self.side.to_string()
    }

    pub fn items(&self) -> &'a PriceList {
        self.items
    }

    pub fn current_selection(&self) -> Option<&'a CurrencyQuote> {
        self.selected
    }

    /// True if `item` is the option currently selected in this slot.
    pub fn is_selected(&self, item: &CurrencyQuote) -> bool {
        self.selected
            .is_some_and(|selected| selected.currency == item.currency)
    }

    /// Applies a choice from this dropdown to the form.
    pub fn on_select(&self, form: SwapForm, item: &CurrencyQuote) -> SwapForm {
        form.select(self.side, item.clone())
    }
}
