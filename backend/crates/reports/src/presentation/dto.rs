//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EstimateQuery, PriceEstimate};
use crate::error::ReportsError;

/// Estimate request (query string or JSON body)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub lng: f64,
    pub lat: f64,
}

impl TryFrom<EstimateRequest> for EstimateQuery {
    type Error = ReportsError;

    fn try_from(req: EstimateRequest) -> Result<Self, Self::Error> {
        EstimateQuery::new(req.make, req.model, req.year, req.mileage, req.lng, req.lat)
    }
}

/// Estimate response; `price` is null when no report matched
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub price: Option<f64>,
}

impl From<Option<PriceEstimate>> for EstimateResponse {
    fn from(estimate: Option<PriceEstimate>) -> Self {
        Self {
            price: estimate.map(|e| e.price),
        }
    }
}
