//! Fixed keyword tables for section detection and reply classification.
//!
//! The tables are process-wide constants, built once at startup and injected
//! into the segmenter, parser, and classifier as a read-only lexicon.

use std::collections::BTreeMap;

use crate::models::resume::Category;

/// Section heading anchors. A line containing any of these starts the
/// category's section and terminates any *other* category's section.
fn anchors_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::PersonalInfo => &["个人信息", "基本信息"],
        Category::Education => &["教育背景", "教育经历", "学习经历"],
        Category::WorkExperience => &["工作经历", "工作经验", "实习经历"],
        Category::Skills => &["专业技能", "技能特长", "技能"],
        Category::Projects => &["项目经历", "项目经验"],
        Category::Overall => &[],
    }
}

/// Secondary content filter applied to a section's lines. Section boundaries
/// are keyword-anchored and therefore noisy; a line is kept only if it also
/// contains one of these tokens. Best-effort: genuine entries without any
/// token are dropped.
pub fn plausibility_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Education => &[
            "大学", "学院", "学校", "专业", "学历", "本科", "硕士", "博士",
        ],
        Category::WorkExperience => &["公司", "职位", "负责", "工作", "实习"],
        Category::Projects => &["项目", "负责", "开发", "设计", "实现"],
        _ => &[],
    }
}

/// Keywords that reassign the classifier's current category when they appear
/// in a line of the LLM reply (in addition to the category's display label).
pub fn classifier_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::PersonalInfo => &["个人信息"],
        Category::Education => &["教育"],
        Category::WorkExperience => &["工作"],
        Category::Skills => &["技能"],
        Category::Projects => &["项目"],
        Category::Overall => &["整体", "总体"],
    }
}

/// Read-only lexicon handed to the segmenter and classifier.
///
/// Per-category boundary sets are precomputed: the boundary of a category is
/// the union of all *other* categories' anchors, so a repeated heading of the
/// same category reads as content rather than a section end.
#[derive(Debug)]
pub struct SectionLexicon {
    boundaries: BTreeMap<Category, Vec<&'static str>>,
}

impl SectionLexicon {
    pub fn new() -> Self {
        let mut boundaries = BTreeMap::new();
        for category in Category::PARSED {
            let others: Vec<&'static str> = Category::PARSED
                .into_iter()
                .filter(|c| *c != category)
                .flat_map(|c| anchors_for(c).iter().copied())
                .collect();
            boundaries.insert(category, others);
        }
        Self { boundaries }
    }

    /// Anchor keywords that start `category`'s section.
    pub fn anchors(&self, category: Category) -> &'static [&'static str] {
        anchors_for(category)
    }

    /// Keywords that terminate `category`'s section.
    pub fn boundary_keywords(&self, category: Category) -> &[&'static str] {
        self.boundaries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for SectionLexicon {
    fn default() -> Self {
        Self::new()
    }
}
