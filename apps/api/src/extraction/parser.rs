//! Structured parser: composes the segmenter and the field extractors into a
//! `ResumeRecord`. All steps are independent and read-only over the line
//! stream, so a weak section never poisons the others.

use crate::extraction::fields::{extract_email, extract_name, extract_phone};
use crate::extraction::keywords::{plausibility_keywords, SectionLexicon};
use crate::extraction::segmenter::find_section;
use crate::models::resume::{Category, ResumeRecord, SectionEntry};
use std::collections::BTreeMap;

/// Parses the paragraph stream produced by the document reader.
pub fn parse_paragraphs(paragraphs: &[String], lexicon: &SectionLexicon) -> ResumeRecord {
    parse_text(&paragraphs.join("\n"), lexicon)
}

/// Parses raw resume text into a structured record. Infallible over text:
/// anything the heuristics cannot place is simply absent from the record.
pub fn parse_text(raw_text: &str, lexicon: &SectionLexicon) -> ResumeRecord {
    let lines: Vec<String> = raw_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    ResumeRecord {
        personal_info: extract_personal_info(raw_text, &lines),
        education: extract_entries(&lines, Category::Education, lexicon),
        work_experience: extract_entries(&lines, Category::WorkExperience, lexicon),
        skills: extract_skills(&lines, lexicon),
        projects: extract_entries(&lines, Category::Projects, lexicon),
        raw_text: raw_text.to_string(),
    }
}

/// Email and phone come from the whole text; the name from a labeled-line
/// scan restricted to the document head. Missing fields are omitted keys.
fn extract_personal_info(raw_text: &str, lines: &[String]) -> BTreeMap<String, String> {
    let mut info = BTreeMap::new();
    if let Some(name) = extract_name(lines) {
        info.insert("姓名".to_string(), name);
    }
    if let Some(phone) = extract_phone(raw_text) {
        info.insert("电话".to_string(), phone);
    }
    if let Some(email) = extract_email(raw_text) {
        info.insert("邮箱".to_string(), email);
    }
    info
}

/// Section span filtered by the category's plausibility keywords. Lines that
/// fail the filter are dropped silently: precision over recall, since the
/// anchor-based boundaries misfire on stray keyword mentions.
fn extract_entries(
    lines: &[String],
    category: Category,
    lexicon: &SectionLexicon,
) -> Vec<SectionEntry> {
    let plausible = plausibility_keywords(category);
    find_section(
        lines,
        lexicon.anchors(category),
        lexicon.boundary_keywords(category),
    )
    .map(|section| {
        section
            .iter()
            .filter(|line| plausible.iter().any(|k| line.contains(k)))
            .map(|line| SectionEntry::new(line.clone()))
            .collect()
    })
    .unwrap_or_default()
}

/// Skills keep every section line except ones still carrying a skills anchor,
/// so a heading variant inside the span never leaks into the content.
fn extract_skills(lines: &[String], lexicon: &SectionLexicon) -> Vec<String> {
    let anchors = lexicon.anchors(Category::Skills);
    find_section(lines, anchors, lexicon.boundary_keywords(Category::Skills))
        .map(|section| {
            section
                .iter()
                .filter(|line| !anchors.iter().any(|k| line.contains(k)))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
