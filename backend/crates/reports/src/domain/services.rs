//! Domain Services - Estimate selection logic
//!
//! Pure functions shared by the in-memory repository and the use case.
//! The PostgreSQL repository expresses the same rules in SQL.

use std::cmp::Reverse;

use crate::domain::entities::Report;
use crate::domain::value_objects::{EstimateQuery, PriceEstimate, SearchWindow};

/// True if `report` is approved, has the query's make and model, and lies
/// inside the window on longitude, latitude and year (bounds inclusive)
pub fn matches(query: &EstimateQuery, window: &SearchWindow, report: &Report) -> bool {
    report.approved
        && report.make == query.make()
        && report.model == query.model()
        && (report.lng - query.lng()).abs() <= window.lng_degrees
        && (report.lat - query.lat()).abs() <= window.lat_degrees
        && (i64::from(report.year) - i64::from(query.year())).abs() <= i64::from(window.years)
}

/// Odometer distance between a report and the query
#[inline]
pub fn mileage_distance(query: &EstimateQuery, report: &Report) -> i64 {
    (i64::from(report.mileage) - i64::from(query.mileage())).abs()
}

/// Matching reports, farthest mileage first, capped at `window.limit`
///
/// Ties keep their input order.
pub fn select_candidates<'a, I>(
    query: &EstimateQuery,
    window: &SearchWindow,
    reports: I,
) -> Vec<Report>
where
    I: IntoIterator<Item = &'a Report>,
{
    let mut candidates: Vec<Report> = reports
        .into_iter()
        .filter(|report| matches(query, window, report))
        .cloned()
        .collect();

    // sort_by_key is stable
    candidates.sort_by_key(|report| Reverse(mileage_distance(query, report)));
    candidates.truncate(window.limit);
    candidates
}

/// Mean price of `candidates`, or `None` when there are none
pub fn average_price(candidates: &[Report]) -> Option<PriceEstimate> {
    if candidates.is_empty() {
        return None;
    }

    let total: i64 = candidates.iter().map(|report| i64::from(report.price)).sum();

    Some(PriceEstimate {
        price: total as f64 / candidates.len() as f64,
        samples: candidates.len(),
    })
}
