//! Section Router

use crate::application::config::SectionConfig;
use crate::domain::repository::SectionRepository;
use crate::infra::postgres::PgSectionRepository;
use crate::presentation::handlers::{self, SectionAppState};
use crate::presentation::middleware::remap_conflict_status;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Create the section router with PostgreSQL repository
pub fn section_router(repo: PgSectionRepository, config: SectionConfig) -> Router {
    section_router_generic(repo, config)
}

/// Create a generic section router for any repository implementation
///
/// Routes are relative; the caller nests them under `/api/section`.
pub fn section_router_generic<R>(repo: R, config: SectionConfig) -> Router
where
    R: SectionRepository + Clone + Send + Sync + 'static,
{
    let state = SectionAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_sections::<R>)
                .post(handlers::create_section::<R>)
                .put(handlers::update_section::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_section::<R>).delete(handlers::delete_section::<R>),
        )
        .layer(middleware::map_response_with_state(
            Arc::new(config),
            remap_conflict_status,
        ))
        .with_state(state)
}
