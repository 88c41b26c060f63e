use crate::di::Repositories;
use k_resolver_application::use_cases::{SeedDirectoryUseCase, SeedOutcome};
use k_resolver_domain::config::DatabaseConfig;
use k_resolver_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", cfg.url);

    let pool = create_pool(&cfg.url, cfg.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to initialize database pool: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}

pub async fn seed_directory(repos: &Repositories) -> anyhow::Result<()> {
    let outcome = SeedDirectoryUseCase::new(repos.isp.clone())
        .execute()
        .await
        .map_err(|e| {
            error!("Failed to seed ISP directory: {}", e);
            anyhow::anyhow!(e)
        })?;

    match outcome {
        SeedOutcome::Seeded(summary) => info!(
            isps = summary.isps,
            dns_servers = summary.dns_servers,
            asn_mappings = summary.asn_mappings,
            "ISP directory seeded"
        ),
        SeedOutcome::Skipped { existing_isps } => {
            info!(existing_isps, "ISP directory already populated, seed skipped")
        }
    }

    Ok(())
}
