//! Axum route handlers for the Session API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ProfileForm, ResumeRef, EXPERIENCE_OPTIONS};
use crate::session::controller::{ResumeUpload, SessionView, SwipeResult};
use crate::session::{DashboardSummary, SwipeDirection};
use crate::state::AppState;

/// Multipart field carrying the resume file.
const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    pub direction: SwipeDirection,
}

#[derive(Debug, Deserialize)]
pub struct DragRequest {
    pub offset_px: f64,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub experience: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        experience: EXPERIENCE_OPTIONS.to_vec(),
    })
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.controller.view().await)
}

/// POST /api/v1/session/start
pub async fn handle_start(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.controller.start().await?))
}

/// PUT /api/v1/session/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.controller.update_profile(form).await?))
}

/// POST /api/v1/session/resume
///
/// Multipart upload; only `application/pdf` is accepted.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRef>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let resume = state
            .controller
            .attach_resume(ResumeUpload {
                file_name,
                content_type,
                size_bytes: data.len(),
            })
            .await?;
        return Ok(Json(resume));
    }

    Err(AppError::BadRequest(format!(
        "multipart field '{RESUME_FIELD}' is missing"
    )))
}

/// POST /api/v1/session/signup
pub async fn handle_signup(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.controller.signup().await?))
}

/// POST /api/v1/session/swipe
pub async fn handle_swipe(
    State(state): State<AppState>,
    Json(request): Json<SwipeRequest>,
) -> Result<Json<SwipeResult>, AppError> {
    Ok(Json(state.controller.swipe(request.direction).await?))
}

/// POST /api/v1/session/drag
pub async fn handle_drag(
    State(state): State<AppState>,
    Json(request): Json<DragRequest>,
) -> Result<Json<SwipeResult>, AppError> {
    Ok(Json(state.controller.drag(request.offset_px).await?))
}

/// POST /api/v1/session/dashboard
pub async fn handle_open_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    Ok(Json(state.controller.open_dashboard().await?))
}

/// POST /api/v1/session/jobs
pub async fn handle_back_to_jobs(
    State(state): State<AppState>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.controller.back_to_jobs().await?))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.controller.dashboard().await)
}
