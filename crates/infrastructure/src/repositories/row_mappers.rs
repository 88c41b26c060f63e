use k_resolver_domain::{DnsServer, Isp, ServerType};
use std::sync::Arc;
use tracing::warn;

pub(crate) type IspRow = (
    i64,
    String,
    Option<String>,
    String,
    String,
    i64,
    String,
    String,
);

pub(crate) const ISP_SELECT: &str =
    "SELECT id, name, name_en, country, isp_type, is_active, created_at, updated_at FROM isps";

pub(crate) type DnsServerRow = (
    i64,
    i64,
    String,
    i64,
    Option<String>,
    String,
    Option<String>,
    Option<String>,
    i64,
    i64,
    Option<String>,
    String,
    String,
);

pub(crate) const DNS_SERVER_SELECT: &str =
    "SELECT id, isp_id, ip_address, priority, region, server_type, doh_url, dot_hostname,
            is_anycast, is_active, notes, created_at, updated_at
     FROM dns_servers";

fn arc_opt(value: Option<String>) -> Option<Arc<str>> {
    value.map(|s| Arc::from(s.as_str()))
}

/// Maps an `isps` row; `dns_servers` is left empty for the caller to fill.
pub(crate) fn row_to_isp(row: IspRow) -> Isp {
    let (id, name, name_en, country, isp_type, is_active, created_at, updated_at) = row;
    Isp {
        id,
        isp_type: isp_type.parse().unwrap_or_else(|e: String| {
            warn!(isp_id = id, error = %e, "Falling back to default ISP type");
            Default::default()
        }),
        name: Arc::from(name.as_str()),
        name_en: arc_opt(name_en),
        country: Arc::from(country.as_str()),
        is_active: is_active != 0,
        created_at,
        updated_at,
        dns_servers: Vec::new(),
    }
}

pub(crate) fn row_to_server(row: DnsServerRow) -> DnsServer {
    let (
        id,
        isp_id,
        ip_address,
        priority,
        region,
        server_type,
        doh_url,
        dot_hostname,
        is_anycast,
        is_active,
        notes,
        created_at,
        updated_at,
    ) = row;
    DnsServer {
        id,
        isp_id,
        ip_address: Arc::from(ip_address.as_str()),
        priority,
        region: arc_opt(region),
        server_type: server_type
            .parse::<ServerType>()
            .unwrap_or(ServerType::Standard),
        doh_url: arc_opt(doh_url),
        dot_hostname: arc_opt(dot_hostname),
        is_anycast: is_anycast != 0,
        is_active: is_active != 0,
        notes: arc_opt(notes),
        created_at,
        updated_at,
    }
}
