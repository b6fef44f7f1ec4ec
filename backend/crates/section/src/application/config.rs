//! Application Configuration
//!
//! Configuration for the section application layer.

/// Section service configuration
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// Report a duplicate-id create as 500 Internal Server Error instead of
    /// 409 Conflict. Existing clients assert on the 500.
    pub legacy_conflict_status: bool,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            legacy_conflict_status: true,
        }
    }
}

impl SectionConfig {
    /// Create config that reports duplicate ids as 409 Conflict
    pub fn strict() -> Self {
        Self {
            legacy_conflict_status: false,
        }
    }

    /// Build from the `SECTION_STRICT_CONFLICT` flag value, if any
    pub fn from_strict_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => Self::strict(),
            _ => Self::default(),
        }
    }
}
