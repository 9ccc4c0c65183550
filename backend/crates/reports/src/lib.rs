//! Reports Backend Module - Price estimates from submitted reports
//!
//! Clean Architecture structure:
//! - `domain/` - Report entity, estimate query, selection rules
//! - `application/` - Estimate use case and configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - Request/response DTOs
//!
//! ## Estimate rules
//! - Same make and model (exact), approved reports only
//! - Within 5 degrees of longitude and latitude, 3 model years (inclusive)
//! - Farthest mileage first, at most 3 reports, mean of their prices

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{EstimateConfig, GetEstimateUseCase};
pub use domain::entities::Report;
pub use domain::value_objects::{EstimateQuery, PriceEstimate, SearchWindow};
pub use error::{ReportsError, ReportsResult};
pub use infra::{InMemoryReportRepository, PgReportRepository};
