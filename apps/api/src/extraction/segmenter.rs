//! Keyword-anchored section boundary detection over a line stream.

/// Finds the span of a section inside `lines`.
///
/// The first line containing any of `category_keywords` anchors the section;
/// the anchor line itself is excluded and content starts on the next line.
/// The section ends (exclusive) at the first subsequent line containing any
/// of `boundary_keywords`, or runs to the end of the stream.
///
/// `None` means the category has no section at all, which is distinct from
/// `Some(&[])`: an anchor immediately followed by another section's anchor.
pub fn find_section<'a>(
    lines: &'a [String],
    category_keywords: &[&str],
    boundary_keywords: &[&str],
) -> Option<&'a [String]> {
    let anchor = lines
        .iter()
        .position(|line| category_keywords.iter().any(|k| line.contains(k)))?;
    let start = anchor + 1;

    let end = lines[start..]
        .iter()
        .position(|line| boundary_keywords.iter().any(|k| line.contains(k)))
        .map(|offset| start + offset)
        .unwrap_or(lines.len());

    Some(&lines[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const EDUCATION: &[&str] = &["教育背景", "教育经历"];
    const OTHERS: &[&str] = &["工作经历", "技能", "项目经历"];

    #[test]
    fn test_no_anchor_returns_none() {
        let stream = lines(&["张三", "电话：13812345678"]);
        assert_eq!(find_section(&stream, EDUCATION, OTHERS), None);
    }

    #[test]
    fn test_section_runs_to_next_boundary() {
        let stream = lines(&[
            "教育背景",
            "2016-2020 北京大学",
            "主修课程：数据结构",
            "工作经历",
            "负责后端开发",
        ]);
        let section = find_section(&stream, EDUCATION, OTHERS).unwrap();
        assert_eq!(section, &stream[1..3]);
    }

    #[test]
    fn test_section_runs_to_end_without_boundary() {
        let stream = lines(&["教育背景", "2016-2020 北京大学", "本科"]);
        let section = find_section(&stream, EDUCATION, OTHERS).unwrap();
        assert_eq!(section, &stream[1..]);
    }

    #[test]
    fn test_adjacent_anchors_yield_empty_section() {
        let stream = lines(&["教育背景", "工作经历", "负责后端开发"]);
        let section = find_section(&stream, EDUCATION, OTHERS).unwrap();
        assert!(section.is_empty());
    }

    #[test]
    fn test_first_anchor_wins_and_repeat_is_content() {
        // A repeated anchor of the same category is not in the boundary set,
        // so it stays inside the section.
        let stream = lines(&[
            "教育背景",
            "2016-2020 北京大学",
            "教育经历补充说明",
            "技能",
            "Python",
        ]);
        let section = find_section(&stream, EDUCATION, OTHERS).unwrap();
        assert_eq!(section, &stream[1..3]);
    }

    #[test]
    fn test_anchor_line_itself_is_excluded() {
        let stream = lines(&["教育背景", "北京大学"]);
        let section = find_section(&stream, EDUCATION, OTHERS).unwrap();
        assert_eq!(section, &stream[1..]);
    }

    #[test]
    fn test_empty_stream() {
        let stream: Vec<String> = Vec::new();
        assert_eq!(find_section(&stream, EDUCATION, OTHERS), None);
    }
}
