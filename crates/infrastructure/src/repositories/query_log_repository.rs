use async_trait::async_trait;
use k_resolver_application::ports::QueryLogRepository;
use k_resolver_domain::{DomainError, QueryLog};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

pub struct SqliteQueryLogRepository {
    pool: SqlitePool,
}

impl SqliteQueryLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryLogRepository for SqliteQueryLogRepository {
    #[instrument(skip(self, query), fields(domain = %query.domain, success = query.success))]
    async fn log_query(&self, query: &QueryLog) -> Result<(), DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let created_at = query.created_at.clone().unwrap_or(now);

        sqlx::query(
            "INSERT INTO query_logs (client_ip, domain, dns_server, response_time_ms, success, error_message, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(query.client_ip.map(|ip| ip.to_string()))
        .bind(&query.domain)
        .bind(&query.dns_server)
        .bind(query.response_time_ms.map(|ms| ms as i64))
        .bind(if query.success { 1i64 } else { 0i64 })
        .bind(&query.error_message)
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert query log");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Query logged");
        Ok(())
    }
}
