mod row_mappers;

pub mod dns_server_repository;
pub mod isp_repository;
pub mod query_log_repository;

pub use dns_server_repository::SqliteDnsServerRepository;
pub use isp_repository::SqliteIspRepository;
pub use query_log_repository::SqliteQueryLogRepository;
