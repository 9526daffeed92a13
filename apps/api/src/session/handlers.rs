use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{EditOp, ResumeDocument};
use crate::errors::AppError;
use crate::render::render_html;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub document: ResumeDocument,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionCreatedResponse> {
    let (session_id, document) = state.sessions.create().await;
    Json(SessionCreatedResponse {
        session_id,
        document,
    })
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    let document = state.sessions.document(id).await?;
    Ok(Json(document))
}

/// POST /api/v1/sessions/:id/edits
/// Applies one `EditOp`; returns the new document. A rejected edit returns
/// 422 and leaves the session's document as it was.
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(op): Json<EditOp>,
) -> Result<Json<ResumeDocument>, AppError> {
    let document = state.sessions.apply(id, &op).await?;
    Ok(Json(document))
}

#[derive(Deserialize)]
pub struct PreviewParams {
    pub template: Option<String>,
    pub format: Option<String>,
}

/// GET /api/v1/sessions/:id/preview?template=harvard&format=json|html
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PreviewParams>,
) -> Result<Response, AppError> {
    let document = state.sessions.document(id).await?;
    let key = params
        .template
        .as_deref()
        .unwrap_or(&state.config.default_template);
    let rendered = state.templates.resolve(key).project(&document);

    match params.format.as_deref() {
        Some("html") => Ok(Html(render_html(&rendered)).into_response()),
        None | Some("json") => Ok(Json(rendered).into_response()),
        Some(other) => Err(AppError::Validation(format!(
            "Unknown preview format '{other}'"
        ))),
    }
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
