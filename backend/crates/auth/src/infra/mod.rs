//! Infrastructure Layer
//!
//! Database implementations and in-memory adapters.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryIdentityRepository;
pub use postgres::PgIdentityRepository;
