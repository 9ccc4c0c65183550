//! PostgreSQL Repository Implementations
//!
//! Expected schema (managed outside this crate):
//!
//! ```sql
//! CREATE TABLE reports (
//!     id           UUID PRIMARY KEY,
//!     price        INTEGER NOT NULL,
//!     make         TEXT NOT NULL,
//!     model        TEXT NOT NULL,
//!     year         INTEGER NOT NULL,
//!     lng          DOUBLE PRECISION NOT NULL,
//!     lat          DOUBLE PRECISION NOT NULL,
//!     mileage      INTEGER NOT NULL,
//!     approved     BOOLEAN NOT NULL DEFAULT FALSE,
//!     submitted_by UUID NULL
//! );
//! ```

use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{IdentityId, ReportId};

use crate::domain::entities::Report;
use crate::domain::repository::EstimateCandidateRepository;
use crate::domain::value_objects::{EstimateQuery, SearchWindow};
use crate::error::{ReportsError, ReportsResult};

/// PostgreSQL-backed report repository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl EstimateCandidateRepository for PgReportRepository {
    async fn find_candidates(
        &self,
        query: &EstimateQuery,
        window: &SearchWindow,
    ) -> ReportsResult<Vec<Report>> {
        let limit = i64::try_from(window.limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT id, price, make, model, year, lng, lat, mileage, approved, submitted_by
            FROM reports
            WHERE make = $1
              AND model = $2
              AND approved IS TRUE
              AND lng - $3 BETWEEN -$4 AND $4
              AND lat - $5 BETWEEN -$6 AND $6
              AND year - $7 BETWEEN -$8 AND $8
            ORDER BY ABS(mileage::BIGINT - $9) DESC
            LIMIT $10
            "#,
        )
        .bind(query.make())
        .bind(query.model())
        .bind(query.lng())
        .bind(window.lng_degrees)
        .bind(query.lat())
        .bind(window.lat_degrees)
        .bind(query.year())
        .bind(window.years)
        .bind(i64::from(query.mileage()))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReportsError::PersistenceUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(ReportRow::into_report).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ReportRow {
    id: Uuid,
    price: i32,
    make: String,
    model: String,
    year: i32,
    lng: f64,
    lat: f64,
    mileage: i32,
    approved: bool,
    submitted_by: Option<Uuid>,
}

impl ReportRow {
    fn into_report(self) -> Report {
        Report {
            id: ReportId::from_uuid(self.id),
            price: self.price,
            make: self.make,
            model: self.model,
            year: self.year,
            lng: self.lng,
            lat: self.lat,
            mileage: self.mileage,
            approved: self.approved,
            submitted_by: self.submitted_by.map(IdentityId::from_uuid),
        }
    }
}
