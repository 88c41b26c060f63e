//! Built-in carrier directory loaded by the seed step.

use crate::dns_server::ServerType;
use crate::isp::IspType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDnsServer {
    pub ip_address: &'static str,
    pub priority: i64,
    pub region: Option<&'static str>,
    pub server_type: ServerType,
    pub doh_url: Option<&'static str>,
    pub is_anycast: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedIsp {
    pub name: &'static str,
    pub name_en: &'static str,
    pub country: &'static str,
    pub isp_type: IspType,
    pub asns: Vec<i64>,
    pub dns_servers: Vec<SeedDnsServer>,
}

const NATIONWIDE: Option<&str> = Some("전국");

fn carrier_server(ip_address: &'static str, priority: i64) -> SeedDnsServer {
    SeedDnsServer {
        ip_address,
        priority,
        region: NATIONWIDE,
        server_type: ServerType::Standard,
        doh_url: None,
        is_anycast: false,
    }
}

fn public_server(ip_address: &'static str, priority: i64, doh_url: &'static str) -> SeedDnsServer {
    SeedDnsServer {
        ip_address,
        priority,
        region: None,
        server_type: ServerType::Doh,
        doh_url: Some(doh_url),
        is_anycast: true,
    }
}

/// Korean carriers followed by the common public resolvers.
///
/// SK브로드밴드 and SK텔레콤 intentionally share AS9318 and the same
/// resolver addresses.
pub fn builtin_directory() -> Vec<SeedIsp> {
    vec![
        SeedIsp {
            name: "KT",
            name_en: "KT Corporation",
            country: "KR",
            isp_type: IspType::Both,
            asns: vec![4766],
            dns_servers: vec![
                carrier_server("168.126.63.1", 1),
                carrier_server("168.126.63.2", 2),
            ],
        },
        SeedIsp {
            name: "SK브로드밴드",
            name_en: "SK Broadband",
            country: "KR",
            isp_type: IspType::Both,
            asns: vec![9318],
            dns_servers: vec![
                carrier_server("210.220.163.82", 1),
                carrier_server("219.250.36.130", 2),
            ],
        },
        SeedIsp {
            name: "LG U+",
            name_en: "LG Uplus",
            country: "KR",
            isp_type: IspType::Both,
            asns: vec![17858],
            dns_servers: vec![
                carrier_server("164.124.101.2", 1),
                carrier_server("203.248.252.2", 2),
            ],
        },
        SeedIsp {
            name: "SK텔레콤",
            name_en: "SK Telecom",
            country: "KR",
            isp_type: IspType::Mobile,
            asns: vec![9318],
            dns_servers: vec![
                carrier_server("210.220.163.82", 1),
                carrier_server("219.250.36.130", 2),
            ],
        },
        SeedIsp {
            name: "Google Public DNS",
            name_en: "Google Public DNS",
            country: "US",
            isp_type: IspType::Both,
            asns: vec![],
            dns_servers: vec![
                public_server("8.8.8.8", 1, "https://dns.google/dns-query"),
                public_server("8.8.4.4", 2, "https://dns.google/dns-query"),
            ],
        },
        SeedIsp {
            name: "Cloudflare DNS",
            name_en: "Cloudflare DNS",
            country: "US",
            isp_type: IspType::Both,
            asns: vec![],
            dns_servers: vec![
                public_server("1.1.1.1", 1, "https://cloudflare-dns.com/dns-query"),
                public_server("1.0.0.1", 2, "https://cloudflare-dns.com/dns-query"),
            ],
        },
        SeedIsp {
            name: "Quad9 DNS",
            name_en: "Quad9 DNS",
            country: "US",
            isp_type: IspType::Both,
            asns: vec![],
            dns_servers: vec![
                public_server("9.9.9.9", 1, "https://dns.quad9.net/dns-query"),
                public_server("149.112.112.112", 2, "https://dns.quad9.net/dns-query"),
            ],
        },
    ]
}
