//! floor-status — Main floor seating snapshot
//!
//! Prints the current seating/reservation status of the main dining floor
//! (tables 1 through 11) as JSON. `DATABASE_URL` supplies the
//! `DefaultConnection` connection string.

use floor_status::{Config, db};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "floor_status=info".into()),
        )
        .init();

    let config = Config::from_env();

    let tables = db::fetch_main_floor_tables(&config).await;
    tracing::info!("Fetched {} main floor tables", tables.len());

    println!("{}", serde_json::to_string_pretty(&tables)?);

    Ok(())
}
