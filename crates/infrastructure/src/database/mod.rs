use async_trait::async_trait;
use k_resolver_application::ports::HealthProbe;
use k_resolver_domain::DomainError;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{error, info};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    info!(url = database_url, max_connections, "Database pool ready");

    Ok(pool)
}

/// Applies the embedded schema. Safe to call on an already migrated store.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Answers `/health` by issuing a trivial query against the pool.
pub struct SqliteHealthProbe {
    pool: SqlitePool,
}

impl SqliteHealthProbe {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for SqliteHealthProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Database ping failed");
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(())
    }
}
