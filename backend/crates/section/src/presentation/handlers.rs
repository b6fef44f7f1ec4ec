//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::{
    CreateSectionInput, CreateSectionUseCase, DeleteSectionUseCase, GetSectionUseCase,
    ListSectionsUseCase, UpdateSectionInput, UpdateSectionUseCase,
};
use crate::domain::repository::SectionRepository;
use crate::domain::value_objects::SectionId;
use crate::error::SectionResult;
use crate::presentation::dto::{SectionRequest, SectionResponse};

/// Shared state for section handlers
#[derive(Clone)]
pub struct SectionAppState<R>
where
    R: SectionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/section
pub async fn list_sections<R>(
    State(state): State<SectionAppState<R>>,
) -> SectionResult<Json<Vec<SectionResponse>>>
where
    R: SectionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListSectionsUseCase::new(state.repo.clone());
    let sections = use_case.execute().await?;

    Ok(Json(sections.into_iter().map(SectionResponse::from).collect()))
}

/// GET /api/section/{id}
pub async fn get_section<R>(
    State(state): State<SectionAppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> SectionResult<Json<SectionResponse>>
where
    R: SectionRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;

    let use_case = GetSectionUseCase::new(state.repo.clone());
    let section = use_case.execute(SectionId::new(id)).await?;

    Ok(Json(section.into()))
}

/// POST /api/section
pub async fn create_section<R>(
    State(state): State<SectionAppState<R>>,
    body: Result<Json<SectionRequest>, JsonRejection>,
) -> SectionResult<impl IntoResponse>
where
    R: SectionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = CreateSectionUseCase::new(state.repo.clone());
    let input = CreateSectionInput {
        id: req.id,
        name: req.name,
    };
    let section = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(SectionResponse::from(section))))
}

/// PUT /api/section
pub async fn update_section<R>(
    State(state): State<SectionAppState<R>>,
    body: Result<Json<SectionRequest>, JsonRejection>,
) -> SectionResult<Json<SectionResponse>>
where
    R: SectionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = UpdateSectionUseCase::new(state.repo.clone());
    let input = UpdateSectionInput {
        id: req.id,
        name: req.name,
    };
    let section = use_case.execute(input).await?;

    Ok(Json(section.into()))
}

/// DELETE /api/section/{id}
pub async fn delete_section<R>(
    State(state): State<SectionAppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> SectionResult<Json<SectionResponse>>
where
    R: SectionRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;

    let use_case = DeleteSectionUseCase::new(state.repo.clone());
    let removed = use_case.execute(SectionId::new(id)).await?;

    Ok(Json(removed.into()))
}
