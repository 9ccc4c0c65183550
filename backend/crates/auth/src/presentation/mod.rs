//! Presentation Layer
//!
//! Request/response shapes. Transport wiring lives with the caller.

pub mod dto;
