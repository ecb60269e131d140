use clap::Args;
use myretail_app::{
    database,
    domain::prices::{PgPriceStore, seed::sample_prices},
};

#[derive(Debug, Args)]
pub(crate) struct SeedPricesArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedPricesArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    let written = PgPriceStore::new(pool)
        .replace_all(&sample_prices())
        .await
        .map_err(|error| format!("failed to seed prices: {error}"))?;

    println!("seeded {written} prices");

    Ok(())
}
