//! Section Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Section entity, value objects, repository trait
//! - `application/` - Use cases (list, get, create, update, delete)
//! - `infra/` - In-memory and PostgreSQL repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Consistency Model
//! - Section ids are chosen by the client and never reassigned
//! - At most one section per id; create on a taken id is rejected, never merged
//! - Check-then-write sequences run atomically inside the repository

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SectionConfig;
pub use error::{SectionError, SectionResult};
pub use infra::memory::InMemorySectionRepository;
pub use infra::postgres::PgSectionRepository;
pub use presentation::router::{section_router, section_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::memory::InMemorySectionRepository as SectionStore;
}
