use super::row_mappers::{row_to_server, DnsServerRow, DNS_SERVER_SELECT};
use async_trait::async_trait;
use k_resolver_application::ports::DnsServerRepository;
use k_resolver_domain::{DnsServer, DomainError};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteDnsServerRepository {
    pool: SqlitePool,
}

impl SqliteDnsServerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DnsServerRepository for SqliteDnsServerRepository {
    #[instrument(skip(self))]
    async fn get_active(&self) -> Result<Vec<DnsServer>, DomainError> {
        let sql = format!(
            "{} WHERE is_active = 1 ORDER BY priority ASC, id ASC",
            DNS_SERVER_SELECT
        );
        let rows = sqlx::query_as::<_, DnsServerRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query active DNS servers");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(row_to_server).collect())
    }

    #[instrument(skip(self))]
    async fn get_active_by_isp(&self, isp_id: i64) -> Result<Vec<DnsServer>, DomainError> {
        let sql = format!(
            "{} WHERE isp_id = ? AND is_active = 1 ORDER BY priority ASC, id ASC",
            DNS_SERVER_SELECT
        );
        let rows = sqlx::query_as::<_, DnsServerRow>(&sql)
            .bind(isp_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query DNS servers by ISP");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(row_to_server).collect())
    }
}
