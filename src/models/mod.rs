pub mod context;
pub mod rules;
pub mod validation;

pub use context::IssueContext;
pub use rules::{FieldRule, FormKind, FormSpec, RuleKind};
pub use validation::{ErrorCategory, Outcome, ValidationError, ValidationResult};
