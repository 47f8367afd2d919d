//! Axum route handlers for the candidate evaluation API.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::evaluator::CandidateEvaluator;
use crate::evaluation::models::{BatchSummary, RankedCandidate};
use crate::evaluation::prompts::PROBE_PROMPT;
use crate::evaluation::ranking::{rank_candidates, summarize};
use crate::ingest;
use crate::state::AppState;

const SUPPORTED_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub success: bool,
    pub job_description: String,
    pub summary: BatchSummary,
    pub candidates: Vec<RankedCandidate>,
    pub processed_at: DateTime<Utc>,
}

/// POST /evaluate-candidates
///
/// Multipart form: `job_description` (text) + `file` (.xlsx/.xls bytes).
/// Pipeline: ingest → per-candidate evaluation (sequential, failures
/// contained) → ranking → summary. Batch-level failures (bad file, empty
/// batch, missing credential) abort before any upstream call is made.
pub async fn handle_evaluate_candidates(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluateResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<bytes::Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid job_description: {e}")))?;
                job_description = Some(text);
            }
            Some("file") => {
                file_name = field.file_name().map(str::to_string);
                file_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read uploaded file: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::Validation("file upload is missing".to_string()))?;
    let file_bytes =
        file_bytes.ok_or_else(|| AppError::Validation("file upload is missing".to_string()))?;

    if !has_supported_extension(&file_name) {
        return Err(AppError::UnsupportedFile(
            "Please upload an Excel file (.xlsx or .xls)".to_string(),
        ));
    }

    // Credential absence is detected before any network call is attempted
    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Configuration("OPENAI_API_KEY is not configured".to_string())
    })?;

    let candidates =
        ingest::parse_candidates(&file_bytes).map_err(|e| AppError::FileFormat(e.to_string()))?;
    if candidates.is_empty() {
        return Err(AppError::EmptyBatch);
    }

    info!(total = candidates.len(), "evaluating candidate batch");

    let evaluator = CandidateEvaluator::new(llm.as_ref());
    let batch = evaluator.evaluate_batch(&job_description, &candidates).await;

    let ranked = rank_candidates(batch);
    let summary = summarize(&ranked);

    info!(
        total = summary.total_candidates,
        average = summary.average_match,
        "candidate batch evaluated"
    );

    Ok(Json(EvaluateResponse {
        success: true,
        job_description,
        summary,
        candidates: ranked,
        processed_at: Utc::now(),
    }))
}

/// POST /test-gpt
///
/// Connectivity probe for the model integration, independent of the main
/// pipeline. Always responds 200; the body says whether a reply came back.
pub async fn handle_test_gpt(State(state): State<AppState>) -> Json<Value> {
    let Some(llm) = state.llm.as_ref() else {
        return Json(json!({ "error": "OPENAI_API_KEY is not configured" }));
    };

    match llm.complete("", PROBE_PROMPT).await {
        Ok(response) => Json(json!({ "success": true, "response": response })),
        Err(e) => Json(json!({ "error": format!("GPT integration failed: {e}") })),
    }
}

fn has_supported_extension(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(has_supported_extension("candidates.xlsx"));
        assert!(has_supported_extension("candidates.xls"));
        assert!(has_supported_extension("CANDIDATES.XLSX"));
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(!has_supported_extension("candidates.csv"));
        assert!(!has_supported_extension("candidates.pdf"));
        assert!(!has_supported_extension("xlsx")); // no dot — not an extension
        assert!(!has_supported_extension("notes.xlsx.txt"));
    }
}
