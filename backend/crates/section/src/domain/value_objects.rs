//! Domain Value Objects
//!
//! Immutable value types for the section domain.

use kernel::id::{Id, markers};
use std::fmt;

use crate::error::{SectionError, SectionResult};

/// Caller-supplied section identifier
pub type SectionId = Id<markers::Section>;

/// Parse a raw id for a new section; `0` means "not supplied"
pub fn parse_section_id(raw: i32) -> SectionResult<SectionId> {
    SectionId::assigned(raw)
        .ok_or_else(|| SectionError::invalid("Id is required and must be non-zero"))
}

/// Section display name
///
/// Never blank. Stored exactly as supplied (no trimming or case folding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionName(String);

impl SectionName {
    pub fn parse(raw: Option<String>) -> SectionResult<Self> {
        match raw {
            None => Err(SectionError::invalid("Name is required")),
            Some(name) if name.trim().is_empty() => {
                Err(SectionError::invalid("Name must not be empty"))
            }
            Some(name) => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_id_rejected() {
        assert!(matches!(parse_section_id(0), Err(SectionError::InvalidInput(_))));
        assert_eq!(parse_section_id(5).unwrap().get(), 5);
    }

    #[test]
    fn test_name_validation() {
        assert!(SectionName::parse(None).is_err());
        assert!(SectionName::parse(Some(String::new())).is_err());
        assert!(SectionName::parse(Some("   \t".into())).is_err());

        let name = SectionName::parse(Some(" Terrace ".into())).unwrap();
        assert_eq!(name.as_str(), " Terrace ");
    }
}
