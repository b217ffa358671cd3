//! Atomic field extraction over raw resume text.
//!
//! Every extractor returns `Option<String>`: a missing field is an absence,
//! never an error, and a returned value is never empty. Patterns within a
//! family are tried in order and the first match anywhere in the text wins.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})\b").unwrap()
});

/// Phone pattern family, most specific first: labeled landline/mobile forms,
/// then a bare mainland mobile number, then a generic grouped-digit catch-all.
/// The catch-all has a known false-positive risk (any 10-12 digit run);
/// kept permissive on purpose.
static PHONE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"电话[：:]\s*(\d{3,4}[-\s]?\d{3,4}[-\s]?\d{4})",
        r"手机[：:]\s*(1[3-9]\d{9})",
        r"联系方式[：:]\s*(\d{3,4}[-\s]?\d{3,4}[-\s]?\d{4})",
        r"(1[3-9]\d{9})",
        r"(\d{3,4}[-\s]?\d{3,4}[-\s]?\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static NAME_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"姓\s*名[：:]\s*([^\s，,]+)").unwrap());

/// How many leading lines are scanned for a `姓名` label.
const NAME_SCAN_LINES: usize = 5;
/// Unlabeled first lines longer than this are assumed to be a title, not a
/// name. Best-effort heuristic; a short non-name first line still misfires.
const NAME_FALLBACK_MAX_CHARS: usize = 10;

/// First email address anywhere in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// First phone number, first-match-wins across the ordered pattern family.
/// Candidates are not aggregated: the first pattern that matches anywhere
/// settles the field.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.captures(text).map(|caps| caps[1].to_string()))
}

/// Candidate name, two-tier: a `姓名` label within the first few lines, or
/// the whole first line when it is short enough to plausibly be a name.
pub fn extract_name(lines: &[String]) -> Option<String> {
    for line in lines.iter().take(NAME_SCAN_LINES) {
        if let Some(caps) = NAME_LABEL_RE.captures(line) {
            return Some(caps[1].to_string());
        }
    }

    let first = lines.first()?;
    if !first.is_empty() && first.chars().count() <= NAME_FALLBACK_MAX_CHARS {
        return Some(first.clone());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_email_found() {
        let text = "邮箱：zhangsan@example.com\n电话：13812345678";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("zhangsan@example.com")
        );
    }

    #[test]
    fn test_email_absent_is_none() {
        assert_eq!(extract_email("没有邮箱的一行"), None);
    }

    #[test]
    fn test_phone_labeled_form_wins() {
        let text = "电话：13812345678";
        assert_eq!(extract_phone(text).as_deref(), Some("13812345678"));
    }

    #[test]
    fn test_phone_mobile_label() {
        let text = "手机: 15900001111";
        assert_eq!(extract_phone(text).as_deref(), Some("15900001111"));
    }

    #[test]
    fn test_phone_bare_mobile_beats_generic() {
        // The bare-mobile pattern matches before the generic landline shape.
        let text = "如有问题请拨 13812345678";
        assert_eq!(extract_phone(text).as_deref(), Some("13812345678"));
    }

    #[test]
    fn test_phone_generic_landline() {
        let text = "联系：010-6552-4321";
        assert_eq!(extract_phone(text).as_deref(), Some("010-6552-4321"));
    }

    #[test]
    fn test_phone_absent_is_none() {
        assert_eq!(extract_phone("纯文本，没有号码"), None);
    }

    #[test]
    fn test_name_labeled_line() {
        let stream = lines(&["个人简历", "姓名：张三", "电话：13812345678"]);
        assert_eq!(extract_name(&stream).as_deref(), Some("张三"));
    }

    #[test]
    fn test_name_label_with_inner_space() {
        let stream = lines(&["姓 名: 李四"]);
        assert_eq!(extract_name(&stream).as_deref(), Some("李四"));
    }

    #[test]
    fn test_name_label_outside_window_is_ignored() {
        let stream = lines(&[
            "一份非常长的文档标题，远远超过了名字的长度限制",
            "二",
            "三",
            "四",
            "五",
            "姓名：张三",
        ]);
        // Label is on line six: outside the scan window, and the first line
        // is too long for the fallback.
        assert_eq!(extract_name(&stream), None);
    }

    #[test]
    fn test_name_falls_back_to_short_first_line() {
        let stream = lines(&["张三", "电话：13812345678"]);
        assert_eq!(extract_name(&stream).as_deref(), Some("张三"));
    }

    #[test]
    fn test_name_fallback_rejects_long_first_line() {
        let stream = lines(&["这是一份关于软件工程师岗位的个人简历文档"]);
        assert_eq!(extract_name(&stream), None);
    }

    #[test]
    fn test_name_empty_stream() {
        assert_eq!(extract_name(&[]), None);
    }
}
