//! In-Memory Repository Implementation
//!
//! Process-local store used when no database is configured, and by tests.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Section;
use crate::domain::repository::SectionRepository;
use crate::domain::value_objects::SectionId;
use crate::error::SectionResult;

/// In-memory repository
///
/// A single `RwLock` guards the whole collection. Mutations hold the write
/// lock across their check and write; reads share the read lock and never
/// see a half-applied mutation. Clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemorySectionRepository {
    sections: Arc<RwLock<BTreeMap<SectionId, Section>>>,
}

impl InMemorySectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sections
    pub async fn len(&self) -> usize {
        self.sections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sections.read().await.is_empty()
    }
}

impl SectionRepository for InMemorySectionRepository {
    async fn list(&self) -> SectionResult<Vec<Section>> {
        let sections = self.sections.read().await;
        Ok(sections.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SectionId) -> SectionResult<Option<Section>> {
        let sections = self.sections.read().await;
        Ok(sections.get(&id).cloned())
    }

    async fn insert(&self, section: &Section) -> SectionResult<bool> {
        let mut sections = self.sections.write().await;
        match sections.entry(section.id) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(section.clone());
                tracing::debug!(section_id = %section.id, "Section stored in memory");
                Ok(true)
            }
        }
    }

    async fn update(&self, section: &Section) -> SectionResult<Option<Section>> {
        let mut sections = self.sections.write().await;
        Ok(sections.get_mut(&section.id).map(|stored| {
            stored.rename(section);
            stored.clone()
        }))
    }

    async fn delete(&self, id: SectionId) -> SectionResult<Option<Section>> {
        let mut sections = self.sections.write().await;
        Ok(sections.remove(&id))
    }
}
