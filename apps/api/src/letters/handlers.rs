//! Axum route handlers for the Letters API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::letters::generator::{render, today, GeneratedLetter};
use crate::letters::session::{Session, Submission};
use crate::letters::stats::{letter_stats, LetterStats};
use crate::letters::templates::{Template, TemplateId, TEMPLATES};
use crate::letters::validation::validate;
use crate::letters::versioning::parse_index;
use crate::models::details::{Field, UserDetails};
use crate::models::version::{LetterVersion, VersionSummary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    pub template: TemplateId,
    pub details: UserDetails,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub template: TemplateId,
    /// Renders the live record when omitted.
    pub details: Option<UserDetails>,
}

#[derive(Debug, Deserialize)]
pub struct SelectTemplateRequest {
    pub template: TemplateId,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: BTreeMap<Field, String>,
}

#[derive(Debug, Serialize)]
pub struct CurrentLetterResponse {
    pub details: UserDetails,
    pub template: TemplateId,
    pub letter: Option<String>,
    pub stats: Option<LetterStats>,
    pub current_version: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct VersionListResponse {
    pub total: usize,
    pub versions: Vec<VersionSummary>,
    pub current_index: Option<usize>,
}

impl From<&Session> for CurrentLetterResponse {
    fn from(session: &Session) -> Self {
        CurrentLetterResponse {
            details: session.details().clone(),
            template: session.template(),
            letter: session.letter().map(str::to_string),
            stats: session.letter().map(letter_stats),
            current_version: session.versions().current_index(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [Template]> {
    Json(TEMPLATES)
}

/// POST /api/v1/letters/validate
pub async fn handle_validate(Json(details): Json<UserDetails>) -> Json<ValidateResponse> {
    let errors = validate(&details.normalize());
    Json(ValidateResponse {
        valid: errors.is_empty(),
        errors: errors.fields,
    })
}

/// POST /api/v1/letters/preview
///
/// Renders without validating or recording a version.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Json<GeneratedLetter> {
    let generated = match request.details {
        Some(details) => render(request.template, &details.normalize(), today()),
        None => state.session.lock().await.preview(request.template, today()),
    };
    Json(generated)
}

/// POST /api/v1/letters/generate
///
/// Makes the submitted record and template live, then validates, renders and
/// records a new version. Validation failures leave the history untouched.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<Submission>, AppError> {
    let mut session = state.session.lock().await;
    session.update_details(request.details);
    session.select_template(request.template);
    let submission = session.submit(Utc::now(), today())?;
    Ok(Json(submission))
}

/// GET /api/v1/letters/current
pub async fn handle_get_current(State(state): State<AppState>) -> Json<CurrentLetterResponse> {
    let session = state.session.lock().await;
    Json(CurrentLetterResponse::from(&*session))
}

/// PUT /api/v1/letters/current/details
pub async fn handle_update_details(
    State(state): State<AppState>,
    Json(details): Json<UserDetails>,
) -> Json<CurrentLetterResponse> {
    let mut session = state.session.lock().await;
    session.update_details(details);
    Json(CurrentLetterResponse::from(&*session))
}

/// PUT /api/v1/letters/current/template
pub async fn handle_select_template(
    State(state): State<AppState>,
    Json(request): Json<SelectTemplateRequest>,
) -> Json<CurrentLetterResponse> {
    let mut session = state.session.lock().await;
    session.select_template(request.template);
    Json(CurrentLetterResponse::from(&*session))
}

/// POST /api/v1/letters/current/skills
pub async fn handle_add_skill(State(state): State<AppState>) -> Json<CurrentLetterResponse> {
    edit_live_details(&state, UserDetails::add_skill).await
}

/// DELETE /api/v1/letters/current/skills/:index
///
/// Removing the only skill slot leaves a blank placeholder.
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<CurrentLetterResponse> {
    edit_live_details(&state, |d| d.remove_skill(index)).await
}

/// POST /api/v1/letters/current/achievements
pub async fn handle_add_achievement(State(state): State<AppState>) -> Json<CurrentLetterResponse> {
    edit_live_details(&state, UserDetails::add_achievement).await
}

/// DELETE /api/v1/letters/current/achievements/:index
pub async fn handle_remove_achievement(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<CurrentLetterResponse> {
    edit_live_details(&state, |d| d.remove_achievement(index)).await
}

async fn edit_live_details(
    state: &AppState,
    edit: impl FnOnce(&mut UserDetails),
) -> Json<CurrentLetterResponse> {
    let mut session = state.session.lock().await;
    session.edit_details(edit);
    Json(CurrentLetterResponse::from(&*session))
}

/// GET /api/v1/letters/current/export
///
/// The letter on display as a plain-text attachment.
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session = state.session.lock().await;
    let letter = session
        .letter()
        .ok_or_else(|| AppError::NotFound("No letter has been generated yet".to_string()))?
        .to_string();
    info!("Exporting letter ({} bytes)", letter.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"cover-letter.txt\"",
            ),
        ],
        letter,
    ))
}

/// GET /api/v1/letters/versions
pub async fn handle_list_versions(State(state): State<AppState>) -> Json<VersionListResponse> {
    let session = state.session.lock().await;
    let store = session.versions();
    Json(VersionListResponse {
        total: store.len(),
        versions: store.list(),
        current_index: store.current_index(),
    })
}

/// GET /api/v1/letters/versions/:index
pub async fn handle_get_version(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<LetterVersion>, AppError> {
    let session = state.session.lock().await;
    let index = parse_index(&index, session.versions().len())?;
    let version = session.versions().get(index)?.clone();
    Ok(Json(version))
}

/// POST /api/v1/letters/versions/:index/restore
///
/// Restores the version's record, template and letter as the live state.
pub async fn handle_restore_version(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<CurrentLetterResponse>, AppError> {
    let mut session = state.session.lock().await;
    let index = parse_index(&index, session.versions().len())?;
    session.restore(index)?;
    Ok(Json(CurrentLetterResponse::from(&*session)))
}
