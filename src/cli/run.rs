use super::forms_for;
use crate::models::{FormKind, IssueContext, Outcome, ValidationResult};
use crate::parser::parse_issue_body;
use crate::reporter::{
    GitHubReporter, IssueReporter, RecordingReporter, DEFAULT_API_URL, INVALID_LABEL,
};
use crate::validator::FormValidator;
use crate::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::info;

/// Comment posted when every field passes
pub const PASSED_COMMENT: &str =
    "✅ **Issue validation passed successfully!**\nAwaiting environment approval to continue.";

/// First line of the comment listing field violations
pub const FAILED_HEADER: &str = "⚠️ **Issue validation failed**:";

/// Inputs for validating the issue that triggered a workflow run
///
/// Every value falls back to the variable a GitHub Actions workflow would
/// export for it.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// API token used for comment/label/close calls
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository slug (owner/name)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Issue number
    #[arg(long = "issue-number", env = "ISSUE_NUMBER")]
    pub issue_number: u64,

    /// Issue title
    #[arg(long = "issue-title", env = "ISSUE_TITLE", allow_hyphen_values = true)]
    pub issue_title: String,

    /// Issue body (markdown)
    #[arg(
        long = "issue-body",
        env = "ISSUE_BODY",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub issue_body: String,

    /// API root URL
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Only handle this form type (default: every built-in form)
    #[arg(long, value_enum)]
    pub form: Option<FormKind>,

    /// Print the actions instead of calling the API
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    pub fn issue(&self) -> IssueContext {
        IssueContext::new(
            &self.repository,
            self.issue_number,
            &self.issue_title,
            &self.issue_body,
        )
    }
}

/// Run the `run` command
pub async fn run(args: &RunArgs) -> Result<Outcome> {
    let issue = args.issue();
    let forms = forms_for(args.form);
    info!(issue = %issue.reference(), dry_run = args.dry_run, "Validating issue");

    if args.dry_run {
        let reporter = RecordingReporter::new();
        let outcome = process_issue(&issue, &forms, &reporter).await?;
        print_planned_actions(&reporter);
        return Ok(outcome);
    }

    let token = args
        .token
        .as_deref()
        .context("GITHUB_TOKEN is required unless --dry-run is set")?;
    let reporter = GitHubReporter::new(&args.api_url, token, &issue)?;
    process_issue(&issue, &forms, &reporter).await
}

/// Decide the outcome for an issue without side effects
///
/// Title filter first, then parse, then validate against the matched form.
pub fn assess_issue(issue: &IssueContext, forms: &[FormKind]) -> Result<Outcome> {
    let Some(kind) = FormKind::detect(&issue.title, forms) else {
        return Ok(Outcome::Skipped);
    };

    let form = parse_issue_body(&issue.body);
    if form.is_empty() {
        return Ok(Outcome::NotAForm { form: kind });
    }

    let validator = FormValidator::new(&kind.spec())?;
    let result = validator.validate(&form);

    if result.is_valid() {
        Ok(Outcome::Passed { form: kind })
    } else {
        Ok(Outcome::Invalid { form: kind, result })
    }
}

/// Assess an issue and report the outcome through `reporter`
///
/// Skipped issues get no calls at all. Failures get one comment, the
/// `invalid` label, then a close, in that order. A pass gets one comment.
pub async fn process_issue(
    issue: &IssueContext,
    forms: &[FormKind],
    reporter: &dyn IssueReporter,
) -> Result<Outcome> {
    let outcome = assess_issue(issue, forms)?;

    match &outcome {
        Outcome::Skipped => {
            println!(
                "{}",
                "⏭️  Issue not from an approved form, skipping validation.".bright_black()
            );
        }
        Outcome::NotAForm { form } => {
            reject(reporter, form.spec().wrong_template_message).await?;
            println!("{}", "⚠️  Non-form issue detected and closed.".yellow());
        }
        Outcome::Invalid { result, .. } => {
            reject(reporter, &failure_comment(result)).await?;
            println!(
                "{}",
                format!(
                    "❌ Validation failed ({} error(s)), issue closed.",
                    result.errors.len()
                )
                .red()
            );
        }
        Outcome::Passed { .. } => {
            reporter.comment(PASSED_COMMENT).await?;
            println!("{}", "✅ Validation passed.".green());
        }
    }

    info!(issue = %issue.reference(), form = ?outcome.form(), exit_code = outcome.exit_code(), "Done");
    Ok(outcome)
}

/// Comment body listing every violation
pub fn failure_comment(result: &ValidationResult) -> String {
    format!("{}\n{}", FAILED_HEADER, result.format_errors())
}

async fn reject(reporter: &dyn IssueReporter, message: &str) -> Result<()> {
    reporter.comment(message).await?;
    reporter.add_label(INVALID_LABEL).await?;
    reporter.close().await?;
    Ok(())
}

fn print_planned_actions(reporter: &RecordingReporter) {
    if reporter.is_empty() {
        println!("{}", "🔍 Dry run: no API calls would be made.".cyan());
        return;
    }

    println!("{}", "🔍 Dry run: would perform".cyan());
    for action in reporter.actions() {
        println!("   • {}", action.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;

    #[test]
    fn test_failure_comment() {
        let result = ValidationResult::new(vec![
            ValidationError::missing_field("Version"),
            ValidationError::empty_section("Confirmations"),
        ]);

        assert_eq!(
            failure_comment(&result),
            "⚠️ **Issue validation failed**:\n\
             ❌ Missing required field: **Version**\n\
             ❌ **Confirmations** section is empty."
        );
    }

    #[test]
    fn test_assess_skips_unknown_title() {
        let issue = IssueContext::new("acme/games", 1, "[Random]: hello", "### Email\nx");
        assert_eq!(assess_issue(&issue, &FormKind::ALL).unwrap(), Outcome::Skipped);
    }

    #[test]
    fn test_assess_flags_body_without_headings() {
        let issue = IssueContext::new("acme/games", 1, "[Update Game]: Foo", "please add my game");
        assert_eq!(
            assess_issue(&issue, &FormKind::ALL).unwrap(),
            Outcome::NotAForm { form: FormKind::Game }
        );
    }

    #[test]
    fn test_assess_uses_form_restriction() {
        let issue = IssueContext::new("acme/games", 1, "[Bug]: crash", "no headings");
        assert_eq!(assess_issue(&issue, &[FormKind::Game]).unwrap(), Outcome::Skipped);
    }
}
