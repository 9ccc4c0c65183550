//! In-Memory Repository Implementation

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::Report;
use crate::domain::repository::EstimateCandidateRepository;
use crate::domain::services::select_candidates;
use crate::domain::value_objects::{EstimateQuery, SearchWindow};
use crate::error::ReportsResult;

/// In-memory report store; candidates come back in insertion order on ties
#[derive(Clone, Default)]
pub struct InMemoryReportRepository {
    reports: Arc<RwLock<Vec<Report>>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: Arc::new(RwLock::new(reports)),
        }
    }

    pub async fn insert(&self, report: Report) {
        self.reports.write().await.push(report);
    }
}

impl EstimateCandidateRepository for InMemoryReportRepository {
    async fn find_candidates(
        &self,
        query: &EstimateQuery,
        window: &SearchWindow,
    ) -> ReportsResult<Vec<Report>> {
        let reports = self.reports.read().await;
        Ok(select_candidates(query, window, reports.iter()))
    }
}
