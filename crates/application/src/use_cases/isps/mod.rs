pub mod get_isp;
pub mod list_isps;

pub use get_isp::GetIspUseCase;
pub use list_isps::ListIspsUseCase;
