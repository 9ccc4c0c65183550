//! Domain Value Objects
//!
//! Immutable value types for the estimate domain.

use crate::error::{ReportsError, ReportsResult};

/// Oldest model year accepted in a query
pub const YEAR_MIN: i32 = 1930;
/// Newest model year accepted in a query
pub const YEAR_MAX: i32 = 2050;
/// Highest odometer reading accepted in a query
pub const MILEAGE_MAX: i32 = 1_000_000;

/// Validated estimate query
///
/// Fields are private so every instance has passed [`EstimateQuery::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateQuery {
    make: String,
    model: String,
    year: i32,
    mileage: i32,
    lng: f64,
    lat: f64,
}

impl EstimateQuery {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: i32,
        lng: f64,
        lat: f64,
    ) -> ReportsResult<Self> {
        let make = make.into();
        let model = model.into();

        if make.is_empty() {
            return Err(ReportsError::InvalidQuery("make must not be empty".into()));
        }
        if model.is_empty() {
            return Err(ReportsError::InvalidQuery("model must not be empty".into()));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ReportsError::InvalidQuery(format!(
                "year must be between {} and {}",
                YEAR_MIN, YEAR_MAX
            )));
        }
        if !(0..=MILEAGE_MAX).contains(&mileage) {
            return Err(ReportsError::InvalidQuery(format!(
                "mileage must be between 0 and {}",
                MILEAGE_MAX
            )));
        }
        // NaN fails every range check
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ReportsError::InvalidQuery(
                "lng must be a longitude between -180 and 180".into(),
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ReportsError::InvalidQuery(
                "lat must be a latitude between -90 and 90".into(),
            ));
        }

        Ok(Self {
            make,
            model,
            year,
            mileage,
            lng,
            lat,
        })
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn mileage(&self) -> i32 {
        self.mileage
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
}

/// Inclusive search window around a query, plus the sample cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    /// Max |lng - query.lng| in degrees
    pub lng_degrees: f64,
    /// Max |lat - query.lat| in degrees
    pub lat_degrees: f64,
    /// Max |year - query.year|
    pub years: i32,
    /// Max number of reports averaged
    pub limit: usize,
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self {
            lng_degrees: 5.0,
            lat_degrees: 5.0,
            years: 3,
            limit: 3,
        }
    }
}

/// Estimated market price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEstimate {
    /// Arithmetic mean of the sampled prices
    pub price: f64,
    /// Number of reports averaged (1..=limit)
    pub samples: usize,
}
