use crate::models::ValidationError;
use regex::Regex;

/// Ticked checklist item, e.g. `- [x] text` or `* [X] text`
pub const CHECKED_ITEM_PATTERN: &str = r"(?i)^[-*]\s*\[x\]";

/// Single-checkbox section: at least one `[x]` anywhere in the value
pub fn check_any_checked(field: &str, value: &str) -> Option<ValidationError> {
    if value.to_lowercase().contains("[x]") {
        None
    } else {
        Some(ValidationError::no_box_checked(field))
    }
}

/// Checklist section: every non-blank line must be a ticked item
///
/// All offending lines are reported in one error. A section with no
/// non-blank lines gets its own error instead.
pub fn check_all_checked(
    field: &str,
    value: &str,
    checked_item: &Regex,
) -> Option<ValidationError> {
    let lines: Vec<&str> = value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Some(ValidationError::empty_section(field));
    }

    let unchecked: Vec<&str> = lines
        .into_iter()
        .filter(|line| !checked_item.is_match(line))
        .collect();

    if unchecked.is_empty() {
        None
    } else {
        Some(ValidationError::unchecked_boxes(field, &unchecked))
    }
}
