use clap::Args;
use myretail_app::{
    database,
    domain::prices::{PgPriceStore, PriceStore},
    ids::ProductId,
};

#[derive(Debug, Args)]
pub(crate) struct GetPriceArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product id
    id: ProductId,
}

pub(crate) async fn run(args: GetPriceArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let record = PgPriceStore::new(pool)
        .get(args.id)
        .await
        .map_err(|error| format!("failed to read price: {error}"))?;

    let Some(record) = record else {
        return Err(format!("no price stored for product {}", args.id));
    };

    println!("id: {}", record.id);
    println!("amount: {}", record.amount);
    println!("currency_code: {}", record.currency_code);

    Ok(())
}
