use k_resolver_application::use_cases::{
    CheckHealthUseCase, DetectIspUseCase, GetIspUseCase, ListDnsServersUseCase, ListIspsUseCase,
    LogQueryUseCase, ResolveDomainUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DirectoryUseCases {
    pub list_isps: Arc<ListIspsUseCase>,
    pub get_isp: Arc<GetIspUseCase>,
    pub list_dns_servers: Arc<ListDnsServersUseCase>,
    pub detect_isp: Arc<DetectIspUseCase>,
}

#[derive(Clone)]
pub struct QueryUseCases {
    pub resolve: Arc<ResolveDomainUseCase>,
    pub log_query: Arc<LogQueryUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub directory: DirectoryUseCases,
    pub queries: QueryUseCases,
    pub health: Arc<CheckHealthUseCase>,
}
