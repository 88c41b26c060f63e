pub mod log_query;

pub use log_query::LogQueryUseCase;
