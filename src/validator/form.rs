use super::checkbox::{check_all_checked, check_any_checked, CHECKED_ITEM_PATTERN};
use crate::models::{FormSpec, RuleKind, ValidationError, ValidationResult};
use crate::parser::ParsedForm;
use regex::Regex;

/// A rule pattern that failed to compile
#[derive(Debug, thiserror::Error)]
#[error("Invalid pattern for field '{field}': {source}")]
pub struct RuleError {
    pub field: String,
    #[source]
    pub source: regex::Error,
}

enum Check {
    Pattern {
        accept: Regex,
        reject: Option<Regex>,
    },
    AnyChecked,
    AllChecked,
}

struct CompiledRule {
    field: &'static str,
    check: Check,
}

/// Applies a form's rule table to a parsed body
pub struct FormValidator {
    rules: Vec<CompiledRule>,
    checked_item: Regex,
}

impl FormValidator {
    /// Compile every pattern of the form up front
    pub fn new(spec: &FormSpec) -> Result<Self, RuleError> {
        let rules = spec
            .rules
            .iter()
            .map(|rule| -> Result<CompiledRule, RuleError> {
                let check = match &rule.kind {
                    RuleKind::Pattern { accept, reject } => Check::Pattern {
                        accept: compile(rule.name, &format!("^(?:{})$", accept))?,
                        reject: reject.map(|r| compile(rule.name, r)).transpose()?,
                    },
                    RuleKind::AnyChecked => Check::AnyChecked,
                    RuleKind::AllChecked => Check::AllChecked,
                };
                Ok(CompiledRule {
                    field: rule.name,
                    check,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            checked_item: compile("checklist", CHECKED_ITEM_PATTERN)?,
        })
    }

    /// Check every rule against the form and collect all violations
    ///
    /// Never stops at the first failure; errors come back in rule table
    /// order.
    pub fn validate(&self, form: &ParsedForm) -> ValidationResult {
        let errors = self
            .rules
            .iter()
            .filter_map(|rule| self.check_field(rule, form))
            .collect();

        ValidationResult::new(errors)
    }

    fn check_field(&self, rule: &CompiledRule, form: &ParsedForm) -> Option<ValidationError> {
        let Some(value) = form.get(rule.field) else {
            return Some(match rule.check {
                Check::AllChecked => ValidationError::missing_checkbox_field(rule.field),
                _ => ValidationError::missing_field(rule.field),
            });
        };
        let value = value.trim();

        match &rule.check {
            Check::Pattern { accept, reject } => {
                let rejected = reject.as_ref().is_some_and(|r| r.is_match(value));
                if accept.is_match(value) && !rejected {
                    None
                } else {
                    Some(ValidationError::invalid_value(rule.field, value))
                }
            }
            Check::AnyChecked => check_any_checked(rule.field, value),
            Check::AllChecked => check_all_checked(rule.field, value, &self.checked_item),
        }
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError {
        field: field.to_string(),
        source,
    })
}
