pub mod detect_isp;

pub use detect_isp::DetectIspUseCase;
