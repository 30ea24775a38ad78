//! PostgreSQL access layer: pool construction, embedded migrations, row
//! models and repositories.

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Upper bound on pooled connections.
const MAX_CONNECTIONS: u32 = 20;

/// Migrations from `db/migrations`, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Create a connection pool from explicit connection options.
pub async fn create_pool(options: PgConnectOptions) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database(),
        max_connections = MAX_CONNECTIONS,
        "Connecting to PostgreSQL",
    );
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply every pending migration from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// How far the connected database's schema is from the embedded migrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaStatus {
    /// Number of successfully applied migrations.
    pub applied: usize,
    /// Versions embedded in this binary that the database has not applied.
    pub pending: Vec<i64>,
}

impl SchemaStatus {
    pub fn is_current(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Compare the migrations recorded in the database against the embedded set.
///
/// Fails when the database is unreachable or has never been migrated.
pub async fn schema_status(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let applied: Vec<i64> = sqlx::query_scalar(
        "SELECT version FROM _sqlx_migrations WHERE success ORDER BY version",
    )
    .fetch_all(pool)
    .await?;

    let pending = MIGRATOR
        .iter()
        .map(|migration| migration.version)
        .filter(|version| !applied.contains(version))
        .collect();

    Ok(SchemaStatus {
        applied: applied.len(),
        pending,
    })
}
