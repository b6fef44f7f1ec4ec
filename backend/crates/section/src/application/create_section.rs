//! Create Section Use Case

use crate::domain::entities::Section;
use crate::domain::repository::SectionRepository;
use crate::error::{SectionError, SectionResult};
use std::sync::Arc;

/// Input DTO for create section
#[derive(Debug, Clone, Default)]
pub struct CreateSectionInput {
    pub id: i32,
    pub name: Option<String>,
}

/// Create Section Use Case
pub struct CreateSectionUseCase<R>
where
    R: SectionRepository,
{
    section_repo: Arc<R>,
}

impl<R> CreateSectionUseCase<R>
where
    R: SectionRepository,
{
    pub fn new(section_repo: Arc<R>) -> Self {
        Self { section_repo }
    }

    pub async fn execute(&self, input: CreateSectionInput) -> SectionResult<Section> {
        let section = Section::parse(input.id, input.name)?;

        // Check-and-insert happens inside the repository as one step
        if !self.section_repo.insert(&section).await? {
            return Err(SectionError::Conflict(section.id));
        }

        tracing::info!(
            section_id = %section.id,
            name = %section.name,
            "Section created"
        );

        Ok(section)
    }
}
