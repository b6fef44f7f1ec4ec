//! Update Section Use Case

use crate::domain::entities::Section;
use crate::domain::repository::SectionRepository;
use crate::domain::value_objects::{SectionId, SectionName};
use crate::error::{SectionError, SectionResult};
use std::sync::Arc;

/// Input DTO for update section
#[derive(Debug, Clone, Default)]
pub struct UpdateSectionInput {
    pub id: i32,
    pub name: Option<String>,
}

/// Update Section Use Case
pub struct UpdateSectionUseCase<R>
where
    R: SectionRepository,
{
    section_repo: Arc<R>,
}

impl<R> UpdateSectionUseCase<R>
where
    R: SectionRepository,
{
    pub fn new(section_repo: Arc<R>) -> Self {
        Self { section_repo }
    }

    pub async fn execute(&self, input: UpdateSectionInput) -> SectionResult<Section> {
        // Id 0 can never be stored, so it is reported as missing rather than invalid
        let id = SectionId::new(input.id);
        if id.is_unassigned() {
            return Err(SectionError::NotFound(id));
        }
        let name = SectionName::parse(input.name)?;
        let section = Section::new(id, name);

        let updated = self
            .section_repo
            .update(&section)
            .await?
            .ok_or(SectionError::NotFound(id))?;

        tracing::info!(
            section_id = %updated.id,
            name = %updated.name,
            "Section updated"
        );

        Ok(updated)
    }
}
