//! Section Response Middleware

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::sync::Arc;

use crate::application::config::SectionConfig;
use crate::error::FailureDetail;

/// Rewrite duplicate-id conflicts to 500 when legacy status mapping is on
///
/// Only responses produced by `SectionError` carry a [`FailureDetail`], so
/// other 409s (none today) pass through untouched.
pub async fn remap_conflict_status(
    State(config): State<Arc<SectionConfig>>,
    response: Response,
) -> Response {
    if !config.legacy_conflict_status {
        return response;
    }

    let Some(detail) = response.extensions().get::<FailureDetail>() else {
        return response;
    };
    if detail.kind != ErrorKind::Conflict {
        return response;
    }

    tracing::debug!(detail = %detail.message, "Reporting conflict as internal error");

    AppError::internal(detail.message.clone())
        .with_action("Use PUT to change an existing section")
        .into_response()
}
