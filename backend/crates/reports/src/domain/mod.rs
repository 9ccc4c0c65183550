//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Report)
//! - Domain value objects (EstimateQuery, SearchWindow, PriceEstimate)
//! - Domain services (candidate selection and averaging)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
