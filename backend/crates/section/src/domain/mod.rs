//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Section)
//! - Domain value objects (SectionId, SectionName)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
