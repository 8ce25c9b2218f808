//! Axum route handlers for the résumé parsing API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::experience::aggregator::RangeOutcome;
use crate::profile::pdf::extract_pdf_text;
use crate::profile::{Extraction, ResumeProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    #[serde(default)]
    pub detail: bool,
}

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub raw_text: String,
}

/// Structured breakdown, only returned when `?detail=true`.
#[derive(Debug, Serialize)]
pub struct ExperienceDetail {
    pub total_months: u64,
    pub years: u64,
    pub ranges: Vec<RangeOutcome>,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    #[serde(flatten)]
    pub profile: ResumeProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceDetail>,
}

impl ParseResponse {
    fn build(extraction: Extraction, cv_url: Option<String>, detail: bool) -> Self {
        let experience = detail.then(|| ExperienceDetail {
            total_months: extraction.experience.total_months,
            years: extraction.experience.years(),
            ranges: extraction.experience.ranges,
        });
        Self {
            profile: extraction.profile,
            cv_url,
            experience,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
/// Multipart fields: `resume` (PDF, required), `cvurl` (optional).
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut resume = None;
    let mut cv_url = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => resume = Some(field.bytes().await?),
            "cvurl" => cv_url = Some(field.text().await?).filter(|u| !u.trim().is_empty()),
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    let text = extract_pdf_text(resume).await?;
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No extractable text in PDF; scanned documents are not supported".to_string(),
        ));
    }

    let extraction = state.extractor.extract(&text, state.clock.as_ref());
    info!(cv_url = ?cv_url, "Parsed uploaded resume");
    Ok(Json(ParseResponse::build(extraction, cv_url, query.detail)))
}

/// POST /api/v1/resumes/parse-text
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text must not be empty".to_string()));
    }
    let extraction = state.extractor.extract(&req.raw_text, state.clock.as_ref());
    Ok(Json(ParseResponse::build(extraction, None, query.detail)))
}
