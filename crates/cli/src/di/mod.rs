mod adapters;
mod repositories;
mod use_cases;

pub use adapters::Adapters;
pub use repositories::Repositories;
pub use use_cases::UseCases;
