//! PostgreSQL Repository Implementation

use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;

use crate::domain::entities::Section;
use crate::domain::repository::SectionRepository;
use crate::domain::value_objects::{SectionId, SectionName};
use crate::error::{SectionError, SectionResult};

/// PostgreSQL-backed repository
///
/// Each operation is a single statement keyed on the primary key, so the
/// database serializes competing writes to the same id.
#[derive(Clone)]
pub struct PgSectionRepository {
    pool: PgPool,
}

impl PgSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SectionRepository for PgSectionRepository {
    async fn list(&self) -> SectionResult<Vec<Section>> {
        let rows = sqlx::query_as::<_, SectionRow>(
            "SELECT section_id, section_name FROM sections ORDER BY section_id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SectionRow::into_section).collect()
    }

    async fn find_by_id(&self, id: SectionId) -> SectionResult<Option<Section>> {
        let row = sqlx::query_as::<_, SectionRow>(
            "SELECT section_id, section_name FROM sections WHERE section_id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SectionRow::into_section).transpose()
    }

    async fn insert(&self, section: &Section) -> SectionResult<bool> {
        let inserted = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO sections (section_id, section_name)
            VALUES ($1, $2)
            ON CONFLICT (section_id) DO NOTHING
            RETURNING section_id
            "#,
        )
        .bind(section.id.get())
        .bind(section.name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                SectionError::Conflict(section.id)
            } else {
                SectionError::Database(e)
            }
        })?;

        if inserted.is_some() {
            tracing::info!(section_id = %section.id, "Section row inserted");
        }

        Ok(inserted.is_some())
    }

    async fn update(&self, section: &Section) -> SectionResult<Option<Section>> {
        let row = sqlx::query_as::<_, SectionRow>(
            r#"
            UPDATE sections
            SET section_name = $2, updated_at = now()
            WHERE section_id = $1
            RETURNING section_id, section_name
            "#,
        )
        .bind(section.id.get())
        .bind(section.name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SectionRow::into_section).transpose()
    }

    async fn delete(&self, id: SectionId) -> SectionResult<Option<Section>> {
        let row = sqlx::query_as::<_, SectionRow>(
            r#"
            DELETE FROM sections
            WHERE section_id = $1
            RETURNING section_id, section_name
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            tracing::info!(section_id = %id, "Section row deleted");
        }

        row.map(SectionRow::into_section).transpose()
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SectionRow {
    section_id: i32,
    section_name: String,
}

impl SectionRow {
    fn into_section(self) -> SectionResult<Section> {
        let id = SectionId::new(self.section_id);
        let name = SectionName::parse(Some(self.section_name)).map_err(|_| {
            SectionError::Internal(format!("Stored section {} has a blank name", id))
        })?;
        Ok(Section::new(id, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_section() {
        let row = SectionRow {
            section_id: 7,
            section_name: "Balcony".into(),
        };
        let section = row.into_section().unwrap();
        assert_eq!(section.id.get(), 7);
        assert_eq!(section.name.as_str(), "Balcony");
    }

    #[test]
    fn test_blank_stored_name_is_internal() {
        let row = SectionRow {
            section_id: 3,
            section_name: "   ".into(),
        };
        let err = row.into_section().unwrap_err();
        assert!(matches!(err, SectionError::Internal(ref msg) if msg.contains("3")));
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::InternalServerError);
    }
}
