use super::row_mappers::{
    row_to_isp, row_to_server, DnsServerRow, IspRow, DNS_SERVER_SELECT, ISP_SELECT,
};
use async_trait::async_trait;
use k_resolver_application::ports::{IspRepository, SeedSummary};
use k_resolver_domain::directory::SeedIsp;
use k_resolver_domain::{DnsServer, DomainError, Isp};
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::{error, instrument};

pub struct SqliteIspRepository {
    pool: SqlitePool,
}

impl SqliteIspRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn servers_for(&self, isp_id: i64) -> Result<Vec<DnsServer>, DomainError> {
        let sql = format!(
            "{} WHERE isp_id = ? ORDER BY priority ASC, id ASC",
            DNS_SERVER_SELECT
        );
        let rows = sqlx::query_as::<_, DnsServerRow>(&sql)
            .bind(isp_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, isp_id, "Failed to load DNS servers for ISP");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(row_to_server).collect())
    }

    async fn isp_by_id(&self, id: i64) -> Result<Option<Isp>, DomainError> {
        let sql = format!("{} WHERE id = ?", ISP_SELECT);
        let row = sqlx::query_as::<_, IspRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query ISP by id");
                DomainError::DatabaseError(e.to_string())
            })?;

        match row {
            Some(row) => {
                let servers = self.servers_for(id).await?;
                Ok(Some(row_to_isp(row).with_dns_servers(servers)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl IspRepository for SqliteIspRepository {
    #[instrument(skip(self))]
    async fn get_all_with_servers(&self) -> Result<Vec<Isp>, DomainError> {
        let sql = format!("{} ORDER BY id ASC", ISP_SELECT);
        let isp_rows = sqlx::query_as::<_, IspRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query ISPs");
                DomainError::DatabaseError(e.to_string())
            })?;

        // One query for every child row instead of one per ISP.
        let sql = format!("{} ORDER BY isp_id ASC, priority ASC, id ASC", DNS_SERVER_SELECT);
        let server_rows = sqlx::query_as::<_, DnsServerRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query DNS servers");
                DomainError::DatabaseError(e.to_string())
            })?;

        let mut by_isp: HashMap<i64, Vec<DnsServer>> = HashMap::new();
        for server in server_rows.into_iter().map(row_to_server) {
            by_isp.entry(server.isp_id).or_default().push(server);
        }

        Ok(isp_rows
            .into_iter()
            .map(|row| {
                let isp = row_to_isp(row);
                let servers = by_isp.remove(&isp.id).unwrap_or_default();
                isp.with_dns_servers(servers)
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_with_servers(&self, id: i64) -> Result<Option<Isp>, DomainError> {
        self.isp_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn find_by_asn(&self, asn: i64) -> Result<Option<Isp>, DomainError> {
        let isp_id = sqlx::query_scalar::<_, i64>(
            "SELECT isp_id FROM asn_mappings WHERE asn = ? ORDER BY isp_id ASC LIMIT 1",
        )
        .bind(asn)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query ASN mapping");
            DomainError::DatabaseError(e.to_string())
        })?;

        match isp_id {
            Some(id) => self.isp_by_id(id).await,
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM isps")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count ISPs");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count as u64)
    }

    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    async fn insert_directory(&self, entries: &[SeedIsp]) -> Result<SeedSummary, DomainError> {
        let db_err = |e: sqlx::Error| {
            error!(error = %e, "Failed to insert directory");
            DomainError::DatabaseError(e.to_string())
        };

        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        let mut summary = SeedSummary::default();

        for entry in entries {
            let isp_id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO isps (name, name_en, country, isp_type, is_active, created_at, updated_at)
                 VALUES (?, ?, ?, ?, 1, ?, ?)
                 RETURNING id",
            )
            .bind(entry.name)
            .bind(entry.name_en)
            .bind(entry.country)
            .bind(entry.isp_type.to_str())
            .bind(&now)
            .bind(&now)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_err)?;
            summary.isps += 1;

            for server in &entry.dns_servers {
                sqlx::query(
                    "INSERT INTO dns_servers (isp_id, ip_address, priority, region, server_type, doh_url,
                                              is_anycast, is_active, created_at, updated_at)
                     VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?, ?)",
                )
                .bind(isp_id)
                .bind(server.ip_address)
                .bind(server.priority)
                .bind(server.region)
                .bind(server.server_type.to_str())
                .bind(server.doh_url)
                .bind(if server.is_anycast { 1i64 } else { 0i64 })
                .bind(&now)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
                summary.dns_servers += 1;
            }

            for asn in &entry.asns {
                sqlx::query(
                    "INSERT INTO asn_mappings (isp_id, asn, as_name, created_at) VALUES (?, ?, ?, ?)",
                )
                .bind(isp_id)
                .bind(*asn)
                .bind(entry.name_en)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
                summary.asn_mappings += 1;
            }
        }

        tx.commit().await.map_err(db_err)?;
        Ok(summary)
    }
}
