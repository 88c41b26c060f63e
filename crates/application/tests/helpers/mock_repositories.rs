#![allow(dead_code)]

use async_trait::async_trait;
use k_resolver_application::ports::{
    AsnLookup, DnsResolver, DnsServerRepository, HealthProbe, IspRepository, QueryLogRepository,
    SeedSummary,
};
use k_resolver_domain::directory::SeedIsp;
use k_resolver_domain::{
    AsnInfo, DnsLookup, DnsServer, DomainError, Isp, IspType, QueryLog, ServerType,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

const NOW: &str = "2024-01-01 00:00:00";

pub fn make_server(id: i64, isp_id: i64, ip: &str, priority: i64, is_active: bool) -> DnsServer {
    DnsServer {
        id,
        isp_id,
        ip_address: Arc::from(ip),
        priority,
        region: None,
        server_type: ServerType::Standard,
        doh_url: None,
        dot_hostname: None,
        is_anycast: false,
        is_active,
        notes: None,
        created_at: NOW.to_string(),
        updated_at: NOW.to_string(),
    }
}

pub fn make_isp(id: i64, name: &str, is_active: bool, servers: Vec<DnsServer>) -> Isp {
    Isp {
        id,
        name: Arc::from(name),
        name_en: None,
        country: Arc::from(Isp::DEFAULT_COUNTRY),
        isp_type: IspType::Both,
        is_active,
        created_at: NOW.to_string(),
        updated_at: NOW.to_string(),
        dns_servers: servers,
    }
}

/// In-memory directory: ISPs, their servers and ASN mappings.
#[derive(Clone, Default)]
pub struct MockIspRepository {
    isps: Arc<RwLock<Vec<Isp>>>,
    asns: Arc<RwLock<Vec<(i64, i64)>>>,
    fail: Arc<AtomicBool>,
}

impl MockIspRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_isp(&self, isp: Isp) {
        self.isps.write().await.push(isp);
    }

    pub async fn map_asn(&self, asn: i64, isp_id: i64) {
        self.asns.write().await.push((asn, isp_id));
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<Isp> {
        self.isps.read().await.clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl IspRepository for MockIspRepository {
    async fn get_all_with_servers(&self) -> Result<Vec<Isp>, DomainError> {
        self.check()?;
        Ok(self.isps.read().await.clone())
    }

    async fn get_with_servers(&self, id: i64) -> Result<Option<Isp>, DomainError> {
        self.check()?;
        Ok(self.isps.read().await.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_asn(&self, asn: i64) -> Result<Option<Isp>, DomainError> {
        self.check()?;
        let mut isp_ids: Vec<i64> = self
            .asns
            .read()
            .await
            .iter()
            .filter(|(a, _)| *a == asn)
            .map(|(_, id)| *id)
            .collect();
        isp_ids.sort_unstable();

        let isps = self.isps.read().await;
        Ok(isp_ids
            .first()
            .and_then(|id| isps.iter().find(|i| i.id == *id).cloned()))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.isps.read().await.len() as u64)
    }

    async fn insert_directory(&self, entries: &[SeedIsp]) -> Result<SeedSummary, DomainError> {
        self.check()?;
        let mut isps = self.isps.write().await;
        let mut asns = self.asns.write().await;
        let mut summary = SeedSummary::default();
        let mut server_id = 0;

        for entry in entries {
            let id = isps.len() as i64 + 1;
            let servers = entry
                .dns_servers
                .iter()
                .map(|s| {
                    server_id += 1;
                    make_server(server_id, id, s.ip_address, s.priority, true)
                })
                .collect::<Vec<_>>();
            summary.dns_servers += servers.len();
            for asn in &entry.asns {
                asns.push((*asn, id));
                summary.asn_mappings += 1;
            }
            isps.push(make_isp(id, entry.name, true, servers));
            summary.isps += 1;
        }
        Ok(summary)
    }
}

#[derive(Clone, Default)]
pub struct MockDnsServerRepository {
    servers: Arc<RwLock<Vec<DnsServer>>>,
}

impl MockDnsServerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_server(&self, server: DnsServer) {
        self.servers.write().await.push(server);
    }
}

#[async_trait]
impl DnsServerRepository for MockDnsServerRepository {
    async fn get_active(&self) -> Result<Vec<DnsServer>, DomainError> {
        let mut servers: Vec<DnsServer> = self
            .servers
            .read()
            .await
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        servers.sort_by_key(|s| s.priority);
        Ok(servers)
    }

    async fn get_active_by_isp(&self, isp_id: i64) -> Result<Vec<DnsServer>, DomainError> {
        let mut servers = self.get_active().await?;
        servers.retain(|s| s.isp_id == isp_id);
        Ok(servers)
    }
}

#[derive(Clone, Default)]
pub struct MockQueryLogRepository {
    logs: Arc<RwLock<Vec<QueryLog>>>,
    fail: Arc<AtomicBool>,
}

impl MockQueryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn get_all(&self) -> Vec<QueryLog> {
        self.logs.read().await.clone()
    }
}

#[async_trait]
impl QueryLogRepository for MockQueryLogRepository {
    async fn log_query(&self, query: &QueryLog) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        self.logs.write().await.push(query.clone());
        Ok(())
    }
}

/// Resolver returning canned answers or errors keyed by domain.
/// Unknown domains answer NXDOMAIN.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    answers: Arc<RwLock<HashMap<String, Vec<String>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    panic_on: Arc<RwLock<Option<String>>>,
    seen: Arc<RwLock<Vec<DnsLookup>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_answers(&self, domain: &str, answers: &[&str]) {
        self.answers.write().await.insert(
            domain.to_string(),
            answers.iter().map(|a| a.to_string()).collect(),
        );
    }

    pub async fn set_error(&self, domain: &str, error: DomainError) {
        self.errors.write().await.insert(domain.to_string(), error);
    }

    pub async fn panic_on(&self, domain: &str) {
        *self.panic_on.write().await = Some(domain.to_string());
    }

    pub async fn lookups(&self) -> Vec<DnsLookup> {
        self.seen.read().await.clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, lookup: &DnsLookup) -> Result<Vec<String>, DomainError> {
        self.seen.write().await.push(lookup.clone());

        let should_panic = self.panic_on.read().await.as_deref() == Some(lookup.domain.as_str());
        if should_panic {
            panic!("resolver blew up");
        }
        if let Some(err) = self.errors.read().await.get(&lookup.domain) {
            return Err(err.clone());
        }
        self.answers
            .read()
            .await
            .get(&lookup.domain)
            .cloned()
            .ok_or_else(|| DomainError::NxDomain(lookup.domain.clone()))
    }
}

#[derive(Clone, Default)]
pub struct MockAsnLookup {
    entries: Arc<RwLock<HashMap<String, AsnInfo>>>,
}

impl MockAsnLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, ip: &str, asn: i64, as_name: Option<&str>) {
        self.entries.write().await.insert(
            ip.to_string(),
            AsnInfo {
                asn,
                as_name: as_name.map(str::to_string),
            },
        );
    }
}

#[async_trait]
impl AsnLookup for MockAsnLookup {
    async fn lookup(&self, ip: &str) -> Option<AsnInfo> {
        self.entries.read().await.get(ip).cloned()
    }
}

#[derive(Clone, Default)]
pub struct MockHealthProbe {
    down: Arc<AtomicBool>,
}

impl MockHealthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }
}

#[async_trait]
impl HealthProbe for MockHealthProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}
