use clap::{Parser, Subcommand};

mod prices;

#[derive(Debug, Parser)]
#[command(name = "myretail-app", about = "myRetail admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Prices(prices::PricesCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Prices(command) => prices::run(command).await,
        }
    }
}
