use super::forms_for;
use super::run::assess_issue;
use crate::models::{FormKind, IssueContext, Outcome};
use crate::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Validate a saved issue body locally, without contacting the tracker
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Issue title, used to pick the form
    #[arg(long, allow_hyphen_values = true)]
    pub title: String,

    /// File containing the issue body
    #[arg(long = "body-file")]
    pub body_file: PathBuf,

    /// Only consider this form type
    #[arg(long, value_enum)]
    pub form: Option<FormKind>,

    /// Output the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the `check` command
pub fn run(args: &CheckArgs) -> Result<Outcome> {
    let body = std::fs::read_to_string(&args.body_file)
        .with_context(|| format!("Failed to read body file {}", args.body_file.display()))?;
    let issue = IssueContext::new("local", 0, &args.title, body);

    let outcome = assess_issue(&issue, &forms_for(args.form))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(outcome)
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Skipped => {
            println!("{}", "⏭️  Title matches no known form, nothing to check.".bright_black());
        }
        Outcome::NotAForm { form } => {
            println!(
                "{}",
                format!("⚠️  Body has no '### ' headings; expected the {} form.", form).yellow()
            );
        }
        Outcome::Invalid { form, result } => {
            println!(
                "{}",
                format!("❌ {} form: {} error(s)", form, result.errors.len()).red()
            );
            println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            for error in &result.errors {
                println!("   [{}] {}", error.category.name().yellow(), error.message);
            }
        }
        Outcome::Passed { form } => {
            println!("{}", format!("✅ {} form: all fields valid", form).green());
        }
    }
}
