//! Core swap logic: quotes, conversion arithmetic and the swap form

pub mod config;
pub mod conversion;
pub mod feed;
pub mod form;
pub mod log;
pub mod quote;

// Re-export main types for cleaner imports
pub use conversion::{convert, quote_description, rate_description};
pub use feed::PriceFeed;
pub use form::{ConversionState, QuoteDropdown, Side, SwapForm};
pub use quote::{CurrencyQuote, PriceList, RawQuote, normalize};
