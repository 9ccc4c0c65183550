//! Application Layer - Use cases and orchestration

pub mod config;
pub mod get_estimate;

pub use config::EstimateConfig;
pub use get_estimate::GetEstimateUseCase;
