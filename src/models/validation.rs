use super::rules::FormKind;
use serde::{Deserialize, Serialize};

/// Category of a field violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Required heading not present in the body
    MissingField,
    /// Value does not match the field's pattern
    InvalidValue,
    /// No `[x]` anywhere in a single-checkbox section
    NoBoxChecked,
    /// At least one checklist line is not ticked
    UncheckedBoxes,
    /// Checklist section has no non-blank lines
    EmptySection,
}

impl ErrorCategory {
    /// Get display name for category
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::MissingField => "Missing Field",
            ErrorCategory::InvalidValue => "Invalid Value",
            ErrorCategory::NoBoxChecked => "No Box Checked",
            ErrorCategory::UncheckedBoxes => "Unchecked Boxes",
            ErrorCategory::EmptySection => "Empty Section",
        }
    }
}

/// A single field violation, rendered as one line of the issue comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field (heading) the error belongs to
    pub field: String,
    /// Markdown message posted back to the issue author
    pub message: String,
    pub category: ErrorCategory,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, category: ErrorCategory) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            category,
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(
            field,
            format!("❌ Missing required field: **{}**", field),
            ErrorCategory::MissingField,
        )
    }

    pub fn missing_checkbox_field(field: &str) -> Self {
        Self::new(
            field,
            format!("❌ Missing required checkbox field: **{}**", field),
            ErrorCategory::MissingField,
        )
    }

    pub fn invalid_value(field: &str, value: &str) -> Self {
        Self::new(
            field,
            format!("❌ **{}** value '{}' is invalid.", field, value),
            ErrorCategory::InvalidValue,
        )
    }

    pub fn no_box_checked(field: &str) -> Self {
        Self::new(
            field,
            format!("☑️ You must check at least one box in **{}**.", field),
            ErrorCategory::NoBoxChecked,
        )
    }

    pub fn unchecked_boxes(field: &str, lines: &[&str]) -> Self {
        Self::new(
            field,
            format!(
                "☑️ All checkboxes in **{}** must be checked. The following are unchecked:\n- {}",
                field,
                lines.join("\n- ")
            ),
            ErrorCategory::UncheckedBoxes,
        )
    }

    pub fn empty_section(field: &str) -> Self {
        Self::new(
            field,
            format!("❌ **{}** section is empty.", field),
            ErrorCategory::EmptySection,
        )
    }
}

/// Result of validating one parsed form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Every violation found, in rule table order
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors recorded against a single field
    pub fn errors_for(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    pub fn count_by_category(&self, category: ErrorCategory) -> usize {
        self.errors.iter().filter(|e| e.category == category).count()
    }

    /// Format all errors, one message per line
    pub fn format_errors(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Terminal state of one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Title matched no enabled form; nothing was touched
    Skipped,
    /// Title matched but the body has no `### ` headings
    NotAForm { form: FormKind },
    /// One or more fields failed their rule
    Invalid {
        form: FormKind,
        result: ValidationResult,
    },
    Passed { form: FormKind },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::NotAForm { .. } | Outcome::Invalid { .. })
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_failure() {
            1
        } else {
            0
        }
    }

    pub fn form(&self) -> Option<FormKind> {
        match self {
            Outcome::Skipped => None,
            Outcome::NotAForm { form }
            | Outcome::Invalid { form, .. }
            | Outcome::Passed { form } => Some(*form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_errors_joins_with_newlines() {
        let result = ValidationResult::new(vec![
            ValidationError::missing_field("Version"),
            ValidationError::invalid_value("Email", "nope"),
        ]);

        assert_eq!(
            result.format_errors(),
            "❌ Missing required field: **Version**\n❌ **Email** value 'nope' is invalid."
        );
    }

    #[test]
    fn test_unchecked_boxes_lists_every_line() {
        let error = ValidationError::unchecked_boxes("Confirmations", &["- [ ] a", "- [ ] b"]);

        assert_eq!(error.category, ErrorCategory::UncheckedBoxes);
        assert!(error.message.ends_with("unchecked:\n- - [ ] a\n- - [ ] b"));
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Skipped.exit_code(), 0);
        assert_eq!(Outcome::Passed { form: FormKind::Report }.exit_code(), 0);
        assert_eq!(Outcome::NotAForm { form: FormKind::Game }.exit_code(), 1);
        let invalid = Outcome::Invalid {
            form: FormKind::Game,
            result: ValidationResult::new(vec![ValidationError::missing_field("sha256")]),
        };
        assert_eq!(invalid.exit_code(), 1);
        assert_eq!(invalid.form(), Some(FormKind::Game));
    }

    #[test]
    fn test_count_by_category() {
        let result = ValidationResult::new(vec![
            ValidationError::missing_field("a"),
            ValidationError::missing_field("b"),
            ValidationError::empty_section("c"),
        ]);

        assert_eq!(result.count_by_category(ErrorCategory::MissingField), 2);
        assert_eq!(result.count_by_category(ErrorCategory::EmptySection), 1);
        assert_eq!(result.errors_for("c").len(), 1);
        assert!(!result.is_valid());
    }
}
