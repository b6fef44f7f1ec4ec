//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemorySectionRepository;
pub use postgres::PgSectionRepository;
