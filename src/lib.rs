pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::convert::ConvertArgs;
use crate::cli::dialog::{Confirmation, Decision, FixedConfirmation, TerminalConfirmation};
use crate::core::config::AppConfig;
use crate::core::quote::normalize_with_icons;
use crate::core::{PriceFeed, PriceList, SwapForm};
use anyhow::Result;
use tracing::{debug, error, info};

pub enum AppCommand {
    Quotes,
    Rate { from: String, to: String },
    Convert(ConvertArgs),
}

/// Fetches and normalizes the price list once. A failed fetch is logged and
/// yields an empty list, which leaves the swap form uninitialized.
pub async fn load_price_list(feed: &dyn PriceFeed, icon_template: &str) -> PriceList {
    match feed.fetch_quotes().await {
        Ok(entries) => normalize_with_icons(entries, icon_template),
        Err(e) => {
            error!(error = %e, "Unable to fetch currencies");
            PriceList::default()
        }
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("swapx starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let feed = providers::HttpPriceFeed::from_config(&config.feed);
    let spinner = cli::ui::new_spinner("Fetching prices...");
    let list = load_price_list(&feed, &config.icon_url_template).await;
    spinner.finish_and_clear();

    let form = SwapForm::initialize(&list);

    match command {
        AppCommand::Quotes => {
            cli::quotes::run(&list, &form);
            Ok(())
        }
        AppCommand::Rate { from, to } => cli::rate::run(&list, form, &from, &to),
        AppCommand::Convert(args) => {
            let dialog: Box<dyn Confirmation> = if args.yes {
                Box::new(FixedConfirmation(Decision::Confirmed))
            } else {
                Box::new(TerminalConfirmation::new())
            };
            cli::convert::run(&list, form, &args, dialog.as_ref()).map(|_| ())
        }
    }
}
