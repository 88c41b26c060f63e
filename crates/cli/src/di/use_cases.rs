use super::{Adapters, Repositories};
use k_resolver_api::state::{DirectoryUseCases, QueryUseCases};
use k_resolver_api::AppState;
use k_resolver_application::use_cases::{
    CheckHealthUseCase, DetectIspUseCase, GetIspUseCase, ListDnsServersUseCase, ListIspsUseCase,
    LogQueryUseCase, ResolveDomainUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub list_isps: Arc<ListIspsUseCase>,
    pub get_isp: Arc<GetIspUseCase>,
    pub list_dns_servers: Arc<ListDnsServersUseCase>,
    pub detect_isp: Arc<DetectIspUseCase>,
    pub resolve: Arc<ResolveDomainUseCase>,
    pub log_query: Arc<LogQueryUseCase>,
    pub check_health: Arc<CheckHealthUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, adapters: &Adapters) -> Self {
        Self {
            list_isps: Arc::new(ListIspsUseCase::new(repos.isp.clone())),
            get_isp: Arc::new(GetIspUseCase::new(repos.isp.clone())),
            list_dns_servers: Arc::new(ListDnsServersUseCase::new(repos.dns_server.clone())),
            detect_isp: Arc::new(DetectIspUseCase::new(
                adapters.asn_lookup.clone(),
                repos.isp.clone(),
            )),
            resolve: Arc::new(ResolveDomainUseCase::new(adapters.resolver.clone())),
            log_query: Arc::new(LogQueryUseCase::new(repos.query_log.clone())),
            check_health: Arc::new(CheckHealthUseCase::new(repos.health.clone())),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            directory: DirectoryUseCases {
                list_isps: self.list_isps,
                get_isp: self.get_isp,
                list_dns_servers: self.list_dns_servers,
                detect_isp: self.detect_isp,
            },
            queries: QueryUseCases {
                resolve: self.resolve,
                log_query: self.log_query,
            },
            health: self.check_health,
        }
    }
}
