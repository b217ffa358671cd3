//! Resume endpoints: multipart upload driving either the full pipeline or
//! extraction only.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::extraction::parser::parse_paragraphs;
use crate::extraction::reader::extract_paragraphs;
use crate::models::resume::PipelineOutcome;
use crate::pipeline::run_full_analysis;
use crate::state::AppState;

/// POST /api/v1/resumes/analyze
/// Full pipeline: extraction plus both LLM enrichment stages.
pub async fn handle_full_analysis(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PipelineOutcome>, AppError> {
    let (filename, data) = read_upload(multipart).await?;
    let outcome =
        run_full_analysis(state.llm.as_ref(), &state.lexicon, &filename, &data).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/resumes/parse
/// Extraction only, no LLM calls.
pub async fn handle_parse(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let (_filename, data) = read_upload(multipart).await?;
    let paragraphs = extract_paragraphs(&data)?;
    let record = parse_paragraphs(&paragraphs, &state.lexicon);
    Ok(Json(json!({ "success": true, "data": record })))
}

/// Pulls the uploaded document out of the multipart body and validates it.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume.docx").to_string();
        if !filename.to_lowercase().ends_with(".docx") {
            return Err(AppError::Validation(
                "only .docx uploads are supported".to_string(),
            ));
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }
        return Ok((filename, data));
    }
    Err(AppError::Validation("no file uploaded".to_string()))
}
