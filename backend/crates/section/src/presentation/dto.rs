//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::Section;

/// Request body for POST and PUT /api/section
///
/// Both fields are optional on the wire so that an empty object or explicit
/// nulls reach validation and get a 400 with a useful message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectionRequest {
    #[serde(default, alias = "id", deserialize_with = "null_as_zero")]
    pub id: i32,
    #[serde(default, alias = "name")]
    pub name: Option<String>,
}

/// Section as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectionResponse {
    pub id: i32,
    pub name: String,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            id: section.id.get(),
            name: section.name.into_inner(),
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}
