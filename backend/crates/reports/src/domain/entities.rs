//! Domain Entities
//!
//! Core business entities for the estimate domain.

use kernel::id::{IdentityId, ReportId};

/// A submitted sale price for a vehicle
///
/// Read-only here; reports are created and approved elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: ReportId,
    pub price: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub lng: f64,
    pub lat: f64,
    pub mileage: i32,
    /// Only approved reports take part in estimates
    pub approved: bool,
    pub submitted_by: Option<IdentityId>,
}
