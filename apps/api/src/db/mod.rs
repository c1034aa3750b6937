//! Data-access layer: connection pool, the entity mapper, and the
//! persistence gateway over the three recruiting collections.
//!
//! ARCHITECTURAL RULE: no other module may issue SQL or assume the storage
//! field shape. Rows cross this boundary only as mapped entities.

pub mod gateway;
pub mod mapper;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

/// Persistence failures, fatal to the calling operation. No retry is
/// attempted at this layer; handlers surface these to the caller.
/// Read-all failures are not represented here — `gateway::fetch_all_data`
/// degrades per collection instead (see `CollectionRead`).
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to insert into {table}")]
    Insert {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Update matched no row or the call errored. A missing row carries
    /// `sqlx::Error::RowNotFound` as its source.
    #[error("failed to update {table} row {id}")]
    Update {
        table: &'static str,
        id: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to delete from {table} (id {id})")]
    Delete {
        table: &'static str,
        id: String,
        #[source]
        source: sqlx::Error,
    },

    /// A stored JSONB value did not match the shape the entity requires.
    /// Absent values default at the mapper; present-but-malformed values
    /// fail here instead of being silently coerced.
    #[error("failed to decode {table}.{column} for row {id}")]
    Decode {
        table: &'static str,
        column: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Creates the PostgreSQL connection pool and applies pending migrations.
/// Constructed once at startup and injected via `AppState` — never a global.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
