//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains one use case per section operation.

pub mod config;
pub mod create_section;
pub mod delete_section;
pub mod get_section;
pub mod list_sections;
pub mod update_section;

pub use create_section::{CreateSectionInput, CreateSectionUseCase};
pub use delete_section::DeleteSectionUseCase;
pub use get_section::GetSectionUseCase;
pub use list_sections::ListSectionsUseCase;
pub use update_section::{UpdateSectionInput, UpdateSectionUseCase};
