use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use swapx::cli::convert::ConvertArgs;
use swapx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List available currencies and their prices
    Quotes,
    /// Show the exchange rate between two currencies
    Rate {
        /// Currency to convert from
        from: String,
        /// Currency to convert to
        to: String,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Amount to pay, in the "from" currency
        amount: Option<String>,
        /// Currency to pay with (defaults to the first listed)
        #[arg(long)]
        from: Option<String>,
        /// Currency to receive (defaults to the second listed)
        #[arg(long)]
        to: Option<String>,
        /// Swap the "from" and "to" currencies
        #[arg(long)]
        swap: bool,
        /// Confirm without prompting
        #[arg(short, long)]
        yes: bool,
    },
}

impl From<Commands> for swapx::AppCommand {
    fn from(cmd: Commands) -> swapx::AppCommand {
        match cmd {
            Commands::Quotes => swapx::AppCommand::Quotes,
            Commands::Rate { from, to } => swapx::AppCommand::Rate { from, to },
            Commands::Convert {
                amount,
                from,
                to,
                swap,
                yes,
            } => swapx::AppCommand::Convert(ConvertArgs {
                amount,
                from,
                to,
                swap,
                yes,
            }),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => swapx::cli::setup::setup(),
        Some(cmd) => swapx::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
