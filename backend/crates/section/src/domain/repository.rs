//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//!
//! Every mutating method is a single atomic step with respect to other
//! mutations of the same id: no caller ever performs a separate
//! "exists?" check before writing.

use crate::domain::entities::Section;
use crate::domain::value_objects::SectionId;
use crate::error::SectionResult;

/// Section repository trait
#[trait_variant::make(SectionRepository: Send)]
pub trait LocalSectionRepository {
    /// All stored sections, ordered by id
    async fn list(&self) -> SectionResult<Vec<Section>>;

    /// Find a section by id
    async fn find_by_id(&self, id: SectionId) -> SectionResult<Option<Section>>;

    /// Insert a new section
    ///
    /// Returns `false` (and changes nothing) if the id is already taken.
    async fn insert(&self, section: &Section) -> SectionResult<bool>;

    /// Replace the stored section with the same id
    ///
    /// Returns the stored value after the update, or `None` if absent.
    async fn update(&self, section: &Section) -> SectionResult<Option<Section>>;

    /// Remove a section, returning it as it was before removal
    async fn delete(&self, id: SectionId) -> SectionResult<Option<Section>>;
}
