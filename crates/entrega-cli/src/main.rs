mod cep;
mod quote;
mod settings;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::quote::AddressArgs;

#[derive(Debug, Parser)]
#[command(name = "entrega")]
#[command(about = "Delivery fee quotes for the storefront")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Quote a delivery from the store to a customer address
    Quote(AddressArgs),
    /// Quote collecting the order at the store (always free)
    Pickup,
    /// Look up a CEP and print the address it pre-fills
    Cep {
        /// Postal code, with or without punctuation (e.g. 07908-000)
        cep: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = entrega_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Quote(args) => quote::run_quote(&config, &args, cli.json).await,
        Commands::Pickup => quote::run_pickup(&config, cli.json),
        Commands::Cep { cep } => cep::run_cep(&config, &cep, cli.json).await,
    }
}
