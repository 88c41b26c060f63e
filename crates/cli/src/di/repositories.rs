use k_resolver_infrastructure::database::SqliteHealthProbe;
use k_resolver_infrastructure::repositories::{
    SqliteDnsServerRepository, SqliteIspRepository, SqliteQueryLogRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub isp: Arc<SqliteIspRepository>,
    pub dns_server: Arc<SqliteDnsServerRepository>,
    pub query_log: Arc<SqliteQueryLogRepository>,
    pub health: Arc<SqliteHealthProbe>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            isp: Arc::new(SqliteIspRepository::new(pool.clone())),
            dns_server: Arc::new(SqliteDnsServerRepository::new(pool.clone())),
            query_log: Arc::new(SqliteQueryLogRepository::new(pool.clone())),
            health: Arc::new(SqliteHealthProbe::new(pool)),
        }
    }
}
