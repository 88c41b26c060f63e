pub mod list_dns_servers;

pub use list_dns_servers::ListDnsServersUseCase;
