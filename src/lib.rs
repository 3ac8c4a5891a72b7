// issueguard - Issue form validator
// Checks templated GitHub issue submissions and closes the ones that fail

pub mod cli;
pub mod models;
pub mod parser;
pub mod reporter;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{FormKind, FormSpec, IssueContext, Outcome, ValidationError, ValidationResult};
pub use parser::{parse_issue_body, ParsedForm};
pub use reporter::{GitHubReporter, IssueReporter, RecordingReporter, ReporterAction};
pub use validator::FormValidator;
