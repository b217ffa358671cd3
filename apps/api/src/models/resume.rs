use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed section taxonomy shared by the parser and the reply classifier.
///
/// Declaration order is significant: it is the tie-break order when a line
/// matches more than one category, and the section order of the LLM payload.
/// `Overall` only occurs on the classification side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PersonalInfo,
    Education,
    WorkExperience,
    Skills,
    Projects,
    Overall,
}

impl Category {
    /// All categories, in tie-break order.
    pub const ALL: [Category; 6] = [
        Category::PersonalInfo,
        Category::Education,
        Category::WorkExperience,
        Category::Skills,
        Category::Projects,
        Category::Overall,
    ];

    /// Categories produced by the structured parser (no `Overall`).
    pub const PARSED: [Category; 5] = [
        Category::PersonalInfo,
        Category::Education,
        Category::WorkExperience,
        Category::Skills,
        Category::Projects,
    ];

    /// Display label used in LLM replies and in the request payload.
    pub fn label(self) -> &'static str {
        match self {
            Category::PersonalInfo => "个人信息",
            Category::Education => "教育背景",
            Category::WorkExperience => "工作经历",
            Category::Skills => "技能展示",
            Category::Projects => "项目经历",
            Category::Overall => "整体建议",
        }
    }
}

/// One entry of a list-valued section. Serializes as `{"内容": "..."}`,
/// matching the shape consumers of the original service expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    #[serde(rename = "内容")]
    pub content: String,
}

impl SectionEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Structured record derived once per request from the uploaded document.
///
/// Invariants: every list-valued section is present (possibly empty),
/// `personal_info` is a map (possibly empty), and `raw_text` always equals
/// the full extracted document text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal_info: BTreeMap<String, String>,
    pub education: Vec<SectionEntry>,
    pub work_experience: Vec<SectionEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<SectionEntry>,
    pub raw_text: String,
}

/// Per-stage error messages of a pipeline run. `None` means the stage
/// succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageErrors {
    pub analysis_error: Option<String>,
    pub recommendation_error: Option<String>,
}

/// Aggregate result of a full pipeline run. The record is mandatory (the
/// pipeline never returns an outcome when extraction failed) while the two
/// enrichment stages may independently have failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub success: bool,
    pub original_filename: String,
    pub parsed_data: ResumeRecord,
    pub analysis: Option<BTreeMap<Category, String>>,
    pub recommendations: Option<String>,
    pub errors: StageErrors,
}

impl PipelineOutcome {
    /// Assembles the outcome from the extracted record and the two
    /// independently resolved stage results.
    pub fn assemble(
        original_filename: impl Into<String>,
        parsed_data: ResumeRecord,
        analysis: Result<BTreeMap<Category, String>, String>,
        recommendation: Result<String, String>,
    ) -> Self {
        let (analysis, analysis_error) = match analysis {
            Ok(sections) => (Some(sections), None),
            Err(e) => (None, Some(e)),
        };
        let (recommendations, recommendation_error) = match recommendation {
            Ok(text) => (Some(text), None),
            Err(e) => (None, Some(e)),
        };
        PipelineOutcome {
            success: true,
            original_filename: original_filename.into(),
            parsed_data,
            analysis,
            recommendations,
            errors: StageErrors {
                analysis_error,
                recommendation_error,
            },
        }
    }
}
