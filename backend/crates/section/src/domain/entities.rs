//! Domain Entities

use crate::domain::value_objects::{SectionId, SectionName, parse_section_id};
use crate::error::SectionResult;

/// Section entity - a named area of the venue, keyed by a client-chosen id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub name: SectionName,
}

impl Section {
    pub fn new(id: SectionId, name: SectionName) -> Self {
        Self { id, name }
    }

    /// Build a section from raw payload values, checking every required field
    ///
    /// The id is checked first so that an entirely empty payload reports the
    /// missing id.
    pub fn parse(raw_id: i32, raw_name: Option<String>) -> SectionResult<Self> {
        let id = parse_section_id(raw_id)?;
        let name = SectionName::parse(raw_name)?;
        Ok(Self::new(id, name))
    }

    /// Replace the mutable fields with those of `other`; the id is kept
    pub fn rename(&mut self, other: &Section) {
        self.name = other.name.clone();
    }
}
