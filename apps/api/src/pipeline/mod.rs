//! Pipeline orchestrator: extraction → LLM analysis → LLM recommendation.
//!
//! Extraction is mandatory: if the document cannot be read the whole
//! request fails with no partial output. The two enrichment stages are
//! independent failure domains: both are always attempted, and a transport
//! failure in one is reported per-stage without discarding the other or the
//! extraction work. The uploaded bytes live in a uniquely-named temp file
//! whose removal is guaranteed on every exit path.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::classifier::structure_reply;
use crate::analysis::payload::format_resume;
use crate::errors::AppError;
use crate::extraction::keywords::SectionLexicon;
use crate::extraction::parser::parse_paragraphs;
use crate::extraction::reader::read_paragraphs;
use crate::llm_client::prompts::{ANALYSIS_SYSTEM, RECOMMEND_SYSTEM};
use crate::llm_client::{ChatCompletion, ChatParams};
use crate::models::resume::{Category, PipelineOutcome, ResumeRecord};

/// Runs the full analysis pipeline over an uploaded document.
pub async fn run_full_analysis(
    llm: &dyn ChatCompletion,
    lexicon: &SectionLexicon,
    filename: &str,
    bytes: &[u8],
) -> Result<PipelineOutcome, AppError> {
    let request_id = Uuid::new_v4();
    info!("[{request_id}] full analysis started: {filename} ({} bytes)", bytes.len());

    // Scoped temp file: drop removes it on every exit path, including the
    // early returns below.
    let mut temp = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".docx")
        .tempfile()
        .map_err(|e| AppError::Internal(e.into()))?;
    temp.write_all(bytes)
        .map_err(|e| AppError::Internal(e.into()))?;

    let record = extract(temp.path(), lexicon)?;
    info!(
        "[{request_id}] extraction done: {} personal fields, {} education, {} work, {} skills, {} projects",
        record.personal_info.len(),
        record.education.len(),
        record.work_experience.len(),
        record.skills.len(),
        record.projects.len(),
    );

    let payload = format_resume(&record);

    let analysis = analysis_stage(llm, &payload).await;
    match &analysis {
        Ok(_) => info!("[{request_id}] analysis stage succeeded"),
        Err(e) => warn!("[{request_id}] analysis stage failed: {e}"),
    }

    let recommendation = recommendation_stage(llm, &payload).await;
    match &recommendation {
        Ok(_) => info!("[{request_id}] recommendation stage succeeded"),
        Err(e) => warn!("[{request_id}] recommendation stage failed: {e}"),
    }

    if let Err(e) = temp.close() {
        warn!("[{request_id}] failed to remove temp file: {e}");
    }

    info!("[{request_id}] full analysis finished");
    Ok(PipelineOutcome::assemble(
        filename,
        record,
        analysis,
        recommendation,
    ))
}

/// Reads and parses the persisted upload. A `DocumentError` here aborts the
/// whole pipeline.
fn extract(path: &std::path::Path, lexicon: &SectionLexicon) -> Result<ResumeRecord, AppError> {
    let paragraphs = read_paragraphs(path)?;
    Ok(parse_paragraphs(&paragraphs, lexicon))
}

async fn analysis_stage(
    llm: &dyn ChatCompletion,
    payload: &str,
) -> Result<BTreeMap<Category, String>, String> {
    let reply = llm
        .complete(ANALYSIS_SYSTEM, payload, ChatParams::analysis())
        .await
        .map_err(|e| format!("分析失败: {e}"))?;
    Ok(structure_reply(&reply))
}

async fn recommendation_stage(
    llm: &dyn ChatCompletion,
    payload: &str,
) -> Result<String, String> {
    llm.complete(RECOMMEND_SYSTEM, payload, ChatParams::recommendation())
        .await
        .map_err(|e| format!("岗位推荐失败: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::reader::docx_fixture;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// Fake LLM whose two stages can independently succeed or fail. Stages
    /// are told apart by their system prompt.
    struct FakeLlm {
        analysis: Result<String, ()>,
        recommendation: Result<String, ()>,
    }

    #[async_trait]
    impl ChatCompletion for FakeLlm {
        async fn complete(
            &self,
            system: &str,
            _user: &str,
            _params: ChatParams,
        ) -> Result<String, LlmError> {
            let outcome = if system == ANALYSIS_SYSTEM {
                &self.analysis
            } else {
                &self.recommendation
            };
            outcome.clone().map_err(|_| LlmError::Api {
                status: 429,
                message: "rate limited".to_string(),
            })
        }
    }

    fn sample_docx() -> Vec<u8> {
        docx_fixture(&[
            "张三",
            "电话：13812345678",
            "教育背景",
            "2016-2020 北京大学 计算机科学与技术 本科",
            "工作经历",
            "负责后端开发",
        ])
    }

    #[tokio::test]
    async fn test_both_stages_succeed() {
        let llm = FakeLlm {
            analysis: Ok("整体不错。\n教育背景描述清晰。".to_string()),
            recommendation: Ok("推荐岗位：后端工程师".to_string()),
        };
        let lexicon = SectionLexicon::new();

        let outcome = run_full_analysis(&llm, &lexicon, "简历.docx", &sample_docx())
            .await
            .unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.original_filename, "简历.docx");
        assert_eq!(
            outcome.parsed_data.personal_info.get("姓名").map(String::as_str),
            Some("张三")
        );
        let analysis = outcome.analysis.unwrap();
        assert!(analysis.contains_key(&Category::Overall));
        assert!(analysis.contains_key(&Category::Education));
        assert_eq!(
            outcome.recommendations.as_deref(),
            Some("推荐岗位：后端工程师")
        );
        assert!(outcome.errors.analysis_error.is_none());
        assert!(outcome.errors.recommendation_error.is_none());
    }

    #[tokio::test]
    async fn test_analysis_failure_does_not_abort_recommendation() {
        let llm = FakeLlm {
            analysis: Err(()),
            recommendation: Ok("推荐岗位：后端工程师".to_string()),
        };
        let lexicon = SectionLexicon::new();

        let outcome = run_full_analysis(&llm, &lexicon, "简历.docx", &sample_docx())
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(outcome.analysis.is_none());
        assert!(outcome.errors.analysis_error.is_some());
        assert_eq!(
            outcome.recommendations.as_deref(),
            Some("推荐岗位：后端工程师")
        );
        assert!(outcome.errors.recommendation_error.is_none());
    }

    #[tokio::test]
    async fn test_both_stages_fail_still_returns_record() {
        let llm = FakeLlm {
            analysis: Err(()),
            recommendation: Err(()),
        };
        let lexicon = SectionLexicon::new();

        let outcome = run_full_analysis(&llm, &lexicon, "简历.docx", &sample_docx())
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(outcome.analysis.is_none());
        assert!(outcome.recommendations.is_none());
        assert!(outcome.errors.analysis_error.is_some());
        assert!(outcome.errors.recommendation_error.is_some());
        assert!(!outcome.parsed_data.raw_text.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_document_fails_whole_pipeline() {
        let llm = FakeLlm {
            analysis: Ok("unused".to_string()),
            recommendation: Ok("unused".to_string()),
        };
        let lexicon = SectionLexicon::new();

        let result =
            run_full_analysis(&llm, &lexicon, "broken.docx", b"definitely not a docx").await;

        assert!(matches!(result, Err(AppError::DocumentRead(_))));
    }
}
