//! Delete Section Use Case

use crate::domain::entities::Section;
use crate::domain::repository::SectionRepository;
use crate::domain::value_objects::SectionId;
use crate::error::{SectionError, SectionResult};
use std::sync::Arc;

/// Delete Section Use Case
pub struct DeleteSectionUseCase<R>
where
    R: SectionRepository,
{
    section_repo: Arc<R>,
}

impl<R> DeleteSectionUseCase<R>
where
    R: SectionRepository,
{
    pub fn new(section_repo: Arc<R>) -> Self {
        Self { section_repo }
    }

    /// Remove a section and return it as it was just before removal
    pub async fn execute(&self, id: SectionId) -> SectionResult<Section> {
        let removed = self
            .section_repo
            .delete(id)
            .await?
            .ok_or(SectionError::NotFound(id))?;

        tracing::info!(section_id = %id, "Section deleted");

        Ok(removed)
    }
}
