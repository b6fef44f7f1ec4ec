//! Get Section Use Case

use crate::domain::entities::Section;
use crate::domain::repository::SectionRepository;
use crate::domain::value_objects::SectionId;
use crate::error::{SectionError, SectionResult};
use std::sync::Arc;

/// Get Section Use Case
pub struct GetSectionUseCase<R>
where
    R: SectionRepository,
{
    section_repo: Arc<R>,
}

impl<R> GetSectionUseCase<R>
where
    R: SectionRepository,
{
    pub fn new(section_repo: Arc<R>) -> Self {
        Self { section_repo }
    }

    pub async fn execute(&self, id: SectionId) -> SectionResult<Section> {
        self.section_repo
            .find_by_id(id)
            .await?
            .ok_or(SectionError::NotFound(id))
    }
}
