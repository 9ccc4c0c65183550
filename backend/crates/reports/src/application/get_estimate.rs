//! Get Estimate Use Case
//!
//! Averages the prices of comparable approved reports.

use std::sync::Arc;

use crate::application::config::EstimateConfig;
use crate::domain::repository::EstimateCandidateRepository;
use crate::domain::services::average_price;
use crate::domain::value_objects::{EstimateQuery, PriceEstimate};
use crate::error::{ReportsError, ReportsResult};

/// Get estimate use case
pub struct GetEstimateUseCase<R>
where
    R: EstimateCandidateRepository,
{
    repo: Arc<R>,
    config: Arc<EstimateConfig>,
}

impl<R> GetEstimateUseCase<R>
where
    R: EstimateCandidateRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<EstimateConfig>) -> Self {
        Self { repo, config }
    }

    /// `Ok(None)` when no report matches
    pub async fn execute(&self, query: EstimateQuery) -> ReportsResult<Option<PriceEstimate>> {
        let window = &self.config.window;
        let timeout = self.config.persistence_timeout;

        let mut candidates =
            tokio::time::timeout(timeout, self.repo.find_candidates(&query, window))
                .await
                .map_err(|_| {
                    tracing::warn!(
                        timeout_ms = timeout.as_millis() as u64,
                        "Report store call timed out"
                    );
                    ReportsError::PersistenceUnavailable(format!(
                        "find_candidates timed out after {:?}",
                        timeout
                    ))
                })??;

        candidates.truncate(window.limit);
        let estimate = average_price(&candidates);

        match &estimate {
            Some(estimate) => tracing::debug!(
                make = query.make(),
                model = query.model(),
                samples = estimate.samples,
                price = estimate.price,
                "Estimate computed"
            ),
            None => tracing::debug!(
                make = query.make(),
                model = query.model(),
                "No comparable reports"
            ),
        }

        Ok(estimate)
    }
}
