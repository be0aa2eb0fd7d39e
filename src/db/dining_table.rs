//! Main floor dining table queries

use sqlx::Connection;
use sqlx::mysql::MySqlConnection;

use super::FetchError;
use crate::config::{Config, DEFAULT_CONNECTION};
use crate::models::DiningTableStatus;

/// The main floor covers tables 1 through 11.
const MAIN_FLOOR_TABLES_SQL: &str = "SELECT table_id, seats, is_reserved FROM `Table` \
     WHERE table_id BETWEEN 1 AND 11 ORDER BY table_id";

/// Fetch the main floor snapshot, propagating failures.
///
/// Opens its own connection from the `DefaultConnection` string and releases
/// it before returning; no pool, concurrent calls are independent.
pub async fn try_fetch_main_floor_tables(
    config: &Config,
) -> Result<Vec<DiningTableStatus>, FetchError> {
    let url = config
        .connection_string(DEFAULT_CONNECTION)
        .ok_or(FetchError::MissingConnectionString(DEFAULT_CONNECTION))?;

    let mut conn = MySqlConnection::connect(url).await?;
    let rows = sqlx::query_as::<_, DiningTableStatus>(MAIN_FLOOR_TABLES_SQL)
        .fetch_all(&mut conn)
        .await;
    // Close gracefully on the error path too; Drop alone severs the socket.
    conn.close().await.ok();
    Ok(rows?)
}

/// Fetch the main floor snapshot, absorbing failures.
///
/// Missing configuration and database errors are logged once and collapse to
/// an empty list, so callers cannot tell "no rows" from "fetch failed" on
/// this surface. Use [`try_fetch_main_floor_tables`] where that distinction
/// matters.
pub async fn fetch_main_floor_tables(config: &Config) -> Vec<DiningTableStatus> {
    match try_fetch_main_floor_tables(config).await {
        Ok(tables) => tables,
        Err(e) => {
            tracing::error!("Error fetching main floor tables: {e}");
            Vec::new()
        }
    }
}
