use super::forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use k_resolver_application::ports::DnsResolver;
use k_resolver_domain::config::DnsConfig;
use k_resolver_domain::{DnsLookup, DomainError};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const DNS_PORT: u16 = 53;

type SystemConfLoader =
    Arc<dyn Fn() -> Result<(ResolverConfig, ResolverOpts), String> + Send + Sync>;

/// Host resolver configuration (`/etc/resolv.conf` on unix, the registry on windows).
fn read_system_conf() -> Result<(ResolverConfig, ResolverOpts), String> {
    #[cfg(any(unix, target_os = "windows"))]
    {
        hickory_resolver::system_conf::read_system_conf().map_err(|e| e.to_string())
    }
    #[cfg(not(any(unix, target_os = "windows")))]
    {
        Err("no system resolver configuration on this platform".to_string())
    }
}

/// Configured nameservers in order, one entry per address.
///
/// hickory lists each address once per protocol.
fn nameservers(config: &ResolverConfig) -> Vec<SocketAddr> {
    let mut servers: Vec<SocketAddr> = Vec::new();
    for ns in config.name_servers() {
        if !servers.contains(&ns.socket_addr) {
            servers.push(ns.socket_addr);
        }
    }
    servers
}

/// Where a lookup without an explicit server goes, and how hard to try.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SystemTargets {
    servers: Vec<SocketAddr>,
    per_server_timeout: Duration,
    attempts: usize,
}

/// Stub resolver built on hickory wire messages.
///
/// An explicit server gets one question with no retries. Otherwise every
/// system nameserver is tried in order, within the overall query timeout.
/// UDP first; a truncated reply is asked again over TCP.
pub struct HickoryDnsResolver {
    timeout: Duration,
    fallback_server: String,
    system_conf: SystemConfLoader,
}

impl HickoryDnsResolver {
    pub fn new(config: &DnsConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.query_timeout_ms),
            fallback_server: config.fallback_server.clone(),
            system_conf: Arc::new(read_system_conf),
        }
    }

    /// Replaces the host configuration source.
    pub fn with_system_conf<F>(mut self, loader: F) -> Self
    where
        F: Fn() -> Result<(ResolverConfig, ResolverOpts), String> + Send + Sync + 'static,
    {
        self.system_conf = Arc::new(loader);
        self
    }

    /// Accepts `ip`, `ip:port` or `[v6]:port`; a bare address gets port 53.
    pub fn parse_server(server: &str) -> Result<SocketAddr, DomainError> {
        let server = server.trim();
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        server
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, DNS_PORT))
            .map_err(|_| DomainError::InvalidIpAddress(server.to_string()))
    }

    /// The fallback server is used only when the host configuration can't be read
    /// or names no nameserver.
    fn system_targets(&self) -> Result<SystemTargets, DomainError> {
        match (self.system_conf)() {
            Ok((config, opts)) => {
                let servers = nameservers(&config);
                if !servers.is_empty() {
                    return Ok(SystemTargets {
                        servers,
                        per_server_timeout: opts.timeout.min(self.timeout),
                        attempts: opts.attempts.max(1),
                    });
                }
                debug!("System resolver configuration lists no nameservers, using fallback");
            }
            Err(e) => {
                debug!(error = %e, "System resolver configuration unavailable, using fallback");
            }
        }

        Ok(SystemTargets {
            servers: vec![Self::parse_server(&self.fallback_server)?],
            per_server_timeout: self.timeout,
            attempts: 1,
        })
    }

    async fn exchange(
        &self,
        transport: Transport,
        id: u16,
        query: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(query, timeout).await?;
        let response = ResponseParser::parse(&raw.bytes, server)?;

        if response.id != id {
            return Err(DomainError::TransportError {
                server: server.to_string(),
                message: format!(
                    "{} response id {} does not match query id {}",
                    raw.protocol_used, response.id, id
                ),
            });
        }
        Ok(response)
    }

    async fn query_server(
        &self,
        lookup: &DnsLookup,
        id: u16,
        query: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError> {
        let mut response = self
            .exchange(Transport::udp(server), id, query, server, timeout)
            .await?;

        if response.truncated {
            debug!(server = %server, "Truncated UDP response, retrying over TCP");
            response = self
                .exchange(Transport::tcp(server), id, query, server, timeout)
                .await?;
        }

        if response.is_nxdomain() {
            return Err(DomainError::NxDomain(lookup.domain.clone()));
        }
        if response.rcode != ResponseCode::NoError {
            return Err(DomainError::DnsServerError {
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
                server: server.to_string(),
            });
        }

        let answers = response.rendered_answers(RecordTypeMapper::to_hickory(&lookup.record_type));
        if answers.is_empty() {
            return Err(DomainError::NoAnswer {
                domain: lookup.domain.clone(),
                record_type: lookup.record_type.to_string(),
            });
        }

        debug!(server = %server, answers = answers.len(), "Resolved");
        Ok(answers)
    }

    /// Walks the nameservers in order, `attempts` rounds over the list.
    ///
    /// NXDOMAIN and NOANSWER are final; silence, transport failures and
    /// error rcodes move on to the next server.
    async fn query_in_order(
        &self,
        lookup: &DnsLookup,
        id: u16,
        query: &[u8],
        targets: &SystemTargets,
    ) -> Result<Vec<String>, DomainError> {
        let mut last_error = DomainError::TransportError {
            server: "system".to_string(),
            message: "no nameserver configured".to_string(),
        };

        for _ in 0..targets.attempts {
            for &server in &targets.servers {
                match self
                    .query_server(lookup, id, query, server, targets.per_server_timeout)
                    .await
                {
                    Ok(answers) => return Ok(answers),
                    Err(
                        e @ (DomainError::QueryTimeout(_)
                        | DomainError::TransportError { .. }
                        | DomainError::DnsServerError { .. }),
                    ) => {
                        debug!(server = %server, error = %e, "Nameserver failed, trying next");
                        last_error = e;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Err(last_error)
    }
}

#[async_trait]
impl DnsResolver for HickoryDnsResolver {
    #[instrument(skip(self), fields(domain = %lookup.domain, record_type = %lookup.record_type))]
    async fn resolve(&self, lookup: &DnsLookup) -> Result<Vec<String>, DomainError> {
        if let Some(server) = lookup.server.as_deref() {
            let server = Self::parse_server(server)?;
            let (id, query) = MessageBuilder::build_query(&lookup.domain, &lookup.record_type)?;
            return self
                .query_server(lookup, id, &query, server, self.timeout)
                .await;
        }

        let targets = self.system_targets()?;
        let (id, query) = MessageBuilder::build_query(&lookup.domain, &lookup.record_type)?;

        tokio::time::timeout(
            self.timeout,
            self.query_in_order(lookup, id, &query, &targets),
        )
        .await
        .map_err(|_| DomainError::QueryTimeout(self.timeout.as_millis() as u64))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::config::NameServerConfigGroup;

    #[test]
    fn test_parse_bare_ipv4_gets_default_port() {
        let addr = HickoryDnsResolver::parse_server("168.126.63.1").unwrap();
        assert_eq!(addr, "168.126.63.1:53".parse().unwrap());
    }

    #[test]
    fn test_parse_explicit_port() {
        let addr = HickoryDnsResolver::parse_server("127.0.0.1:5353").unwrap();
        assert_eq!(addr.port(), 5353);
    }

    #[test]
    fn test_parse_ipv6_forms() {
        let bare = HickoryDnsResolver::parse_server("2001:4860:4860::8888").unwrap();
        assert_eq!(bare.port(), 53);
        let bracketed = HickoryDnsResolver::parse_server("[::1]:5353").unwrap();
        assert_eq!(bracketed.port(), 5353);
    }

    #[test]
    fn test_parse_hostname_is_rejected() {
        let result = HickoryDnsResolver::parse_server("dns.google");
        assert!(matches!(result, Err(DomainError::InvalidIpAddress(_))));
    }

    fn conf_with(ips: &[IpAddr]) -> ResolverConfig {
        ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(ips, 53, true),
        )
    }

    #[test]
    fn test_unreadable_system_conf_uses_fallback() {
        let resolver = HickoryDnsResolver::new(&DnsConfig::default())
            .with_system_conf(|| Err("resolv.conf: No such file or directory".to_string()));

        let targets = resolver.system_targets().unwrap();

        assert_eq!(targets.servers, vec!["8.8.8.8:53".parse().unwrap()]);
        assert_eq!(targets.attempts, 1);
    }

    #[test]
    fn test_system_nameservers_keep_order_without_duplicates() {
        let first: IpAddr = "168.126.63.1".parse().unwrap();
        let second: IpAddr = "168.126.63.2".parse().unwrap();
        let resolver = HickoryDnsResolver::new(&DnsConfig::default())
            .with_system_conf(move || Ok((conf_with(&[first, second]), ResolverOpts::default())));

        let targets = resolver.system_targets().unwrap();

        assert_eq!(
            targets.servers,
            vec![SocketAddr::new(first, 53), SocketAddr::new(second, 53)]
        );
    }

    #[test]
    fn test_system_timeout_is_capped_by_query_timeout() {
        let ip: IpAddr = "168.126.63.1".parse().unwrap();
        let resolver = HickoryDnsResolver::new(&DnsConfig {
            query_timeout_ms: 500,
            ..DnsConfig::default()
        })
        .with_system_conf(move || {
            let mut opts = ResolverOpts::default();
            opts.timeout = Duration::from_secs(5);
            opts.attempts = 3;
            Ok((conf_with(&[ip]), opts))
        });

        let targets = resolver.system_targets().unwrap();

        assert_eq!(targets.per_server_timeout, Duration::from_millis(500));
        assert_eq!(targets.attempts, 3);
    }

    #[test]
    fn test_empty_system_conf_uses_fallback() {
        let resolver = HickoryDnsResolver::new(&DnsConfig::default())
            .with_system_conf(|| Ok((conf_with(&[]), ResolverOpts::default())));

        let targets = resolver.system_targets().unwrap();

        assert_eq!(targets.servers, vec!["8.8.8.8:53".parse().unwrap()]);
    }
}
