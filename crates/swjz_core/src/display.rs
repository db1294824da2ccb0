//! User-facing texts and helpers for rendering optional fields.

/// Shown in place of a missing Hán-Việt reading.
pub const HANVIET_PLACEHOLDER: &str = "Đang cập nhật...";
/// Shown in place of any other missing text field.
pub const PENDING_PLACEHOLDER: &str = "Nội dung đang được biên soạn...";
/// Shown in place of a missing radical, pinyin or volume in compact places.
pub const DASH_PLACEHOLDER: &str = "—";

pub const NO_RESULTS: &str = "Không tìm thấy kết quả phù hợp.";
pub const EMPTY_DATABASE: &str = "Chưa có dữ liệu trong từ điển.";
pub const PAGE_OUT_OF_RANGE: &str = "Trang này không có kết quả.";
pub const NO_NOTES: &str = "Chưa có dữ liệu chú giải.";
pub const NOT_FOUND: &str = "Không tìm thấy chữ này.";
pub const LOADING: &str = "Đang tải dữ liệu...";

/// Maximum length of explanation excerpts in listings, in characters.
pub const EXCERPT_CHARS: usize = 60;

/// Returns the field's trimmed text, or `None` if it is missing or blank.
pub fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Returns the field's text or the placeholder if it is missing or blank.
pub fn or_placeholder<'a>(field: Option<&'a str>, placeholder: &'a str) -> &'a str {
    present(field).unwrap_or(placeholder)
}

/// Collapses the text into a single line of at most `max_chars` characters.
pub fn excerpt(text: Option<&str>, max_chars: usize) -> String {
    let Some(text) = present(text) else {
        return String::new();
    };
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() <= max_chars {
        line
    } else {
        let mut truncated = line.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_get_placeholders() {
        assert_eq!(or_placeholder(None, HANVIET_PLACEHOLDER), HANVIET_PLACEHOLDER);
        assert_eq!(or_placeholder(Some("  "), PENDING_PLACEHOLDER), PENDING_PLACEHOLDER);
        assert_eq!(or_placeholder(Some("tam"), HANVIET_PLACEHOLDER), "tam");
    }

    #[test]
    fn excerpt_is_single_line() {
        assert_eq!(excerpt(Some("天地\n人之道"), 60), "天地 人之道");
    }

    #[test]
    fn excerpt_truncates_by_characters() {
        let text = "三".repeat(70);
        let res = excerpt(Some(&text), 60);
        assert_eq!(res.chars().count(), 61);
        assert!(res.ends_with('…'));
    }

    #[test]
    fn excerpt_of_nothing_is_empty() {
        assert_eq!(excerpt(None, 10), "");
    }
}
