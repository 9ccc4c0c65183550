//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Report;
use crate::domain::value_objects::{EstimateQuery, SearchWindow};
use crate::error::ReportsResult;

/// Estimate candidate repository trait
#[trait_variant::make(EstimateCandidateRepository: Send)]
pub trait LocalEstimateCandidateRepository {
    /// Approved reports matching the query's make and model inside `window`,
    /// farthest mileage first, at most `window.limit` of them
    async fn find_candidates(
        &self,
        query: &EstimateQuery,
        window: &SearchWindow,
    ) -> ReportsResult<Vec<Report>>;
}
