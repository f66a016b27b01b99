use clap::Parser;
use dotenvy::dotenv;
use pricecraft::{
    cli::{self, Cli},
    config,
    core::labor,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible); logs go to stderr so
    // quote output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Parse arguments before touching the database
    let args = Cli::parse();

    // 4. Load the business seed configuration
    let business_config = config::business::load_default_config()
        .inspect_err(|e| error!("Failed to load config.toml: {e}"))?;
    info!("Loaded business configuration.");

    // 5. Connect and make sure all tables exist
    let db = config::database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 6. Seed empty tables, then refresh the derived hourly rate
    pricecraft::core::settings::seed_from_config(&db, &business_config).await?;
    labor::sync_hourly_rate(&db).await?;

    // 7. Run the requested command
    cli::run(args, &db).await
}
