use clap::{Args, Subcommand};

mod get;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct PricesCommand {
    #[command(subcommand)]
    command: PricesSubcommand,
}

#[derive(Debug, Subcommand)]
enum PricesSubcommand {
    /// Replace every stored price with the sample catalog
    Seed(seed::SeedPricesArgs),

    /// Print the stored price for one product
    Get(get::GetPriceArgs),
}

pub(crate) async fn run(command: PricesCommand) -> Result<(), String> {
    match command.command {
        PricesSubcommand::Seed(args) => seed::run(args).await,
        PricesSubcommand::Get(args) => get::run(args).await,
    }
}
