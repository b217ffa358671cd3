//! Builds the user-prompt payload sent to both LLM stages from a structured
//! record. Sections with no entries are omitted entirely.

use crate::models::resume::{Category, ResumeRecord};

/// Renders the record as a single text block: personal info as `key: value`
/// lines, list sections as `- ` bullets, in the fixed category order.
pub fn format_resume(record: &ResumeRecord) -> String {
    let mut out = String::from("以下是简历内容:\n\n");

    if !record.personal_info.is_empty() {
        out.push_str(&format!("{}:\n", Category::PersonalInfo.label()));
        for (key, value) in &record.personal_info {
            out.push_str(&format!("{key}: {value}\n"));
        }
        out.push('\n');
    }

    push_entries(
        &mut out,
        Category::Education.label(),
        record.education.iter().map(|e| e.content.as_str()),
    );
    push_entries(
        &mut out,
        Category::WorkExperience.label(),
        record.work_experience.iter().map(|e| e.content.as_str()),
    );
    push_entries(
        &mut out,
        "技能",
        record.skills.iter().map(String::as_str),
    );
    push_entries(
        &mut out,
        Category::Projects.label(),
        record.projects.iter().map(|e| e.content.as_str()),
    );

    out
}

fn push_entries<'a>(out: &mut String, header: &str, entries: impl Iterator<Item = &'a str>) {
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        return;
    }
    out.push_str(&format!("{header}:\n"));
    for entry in entries {
        out.push_str(&format!("- {entry}\n"));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SectionEntry;

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut record = ResumeRecord::default();
        record
            .personal_info
            .insert("姓名".to_string(), "张三".to_string());

        let payload = format_resume(&record);
        assert!(payload.contains("个人信息:\n姓名: 张三"));
        assert!(!payload.contains("教育背景"));
        assert!(!payload.contains("技能"));
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        let record = ResumeRecord {
            education: vec![SectionEntry::new("北京大学 本科")],
            work_experience: vec![SectionEntry::new("负责后端开发")],
            skills: vec!["Python".to_string(), "MySQL".to_string()],
            projects: vec![SectionEntry::new("简历分析系统")],
            ..ResumeRecord::default()
        };

        let payload = format_resume(&record);
        let education = payload.find("教育背景:").unwrap();
        let work = payload.find("工作经历:").unwrap();
        let skills = payload.find("技能:").unwrap();
        let projects = payload.find("项目经历:").unwrap();
        assert!(education < work && work < skills && skills < projects);

        assert!(payload.contains("- 负责后端开发\n"));
        assert!(payload.contains("- Python\n- MySQL\n"));
    }

    #[test]
    fn test_fully_empty_record_is_just_the_preamble() {
        let payload = format_resume(&ResumeRecord::default());
        assert_eq!(payload, "以下是简历内容:\n\n");
    }
}
