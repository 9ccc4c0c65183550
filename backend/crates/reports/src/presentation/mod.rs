//! Presentation Layer
//!
//! Request/response shapes for the estimate endpoint.

pub mod dto;
