//! List Sections Use Case

use crate::domain::entities::Section;
use crate::domain::repository::SectionRepository;
use crate::error::SectionResult;
use std::sync::Arc;

/// List Sections Use Case
pub struct ListSectionsUseCase<R>
where
    R: SectionRepository,
{
    section_repo: Arc<R>,
}

impl<R> ListSectionsUseCase<R>
where
    R: SectionRepository,
{
    pub fn new(section_repo: Arc<R>) -> Self {
        Self { section_repo }
    }

    /// Every stored section; an empty store yields an empty vec
    pub async fn execute(&self) -> SectionResult<Vec<Section>> {
        let sections = self.section_repo.list().await?;
        tracing::debug!(count = sections.len(), "Listed sections");
        Ok(sections)
    }
}
