//! Built-in Issue Form Rules
//!
//! Each supported issue form is described by a [`FormSpec`]: the title
//! prefixes that identify it and an ordered table of field rules. Adding a
//! form means adding a table here, not new control flow.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported issue form types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    /// Game catalog submissions (`[New Game]:`, `[Update Game]:`)
    Game,
    /// Bug reports and feature requests (`[Bug]:`, `[Feature Request]:`)
    Report,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Game, FormKind::Report];

    pub fn name(&self) -> &'static str {
        match self {
            FormKind::Game => "game",
            FormKind::Report => "report",
        }
    }

    /// Get the rule table for this form
    pub fn spec(&self) -> FormSpec {
        match self {
            FormKind::Game => FormSpec::game_catalog(),
            FormKind::Report => FormSpec::issue_report(),
        }
    }

    /// Find the first form in `candidates` whose title prefix matches
    pub fn detect(title: &str, candidates: &[FormKind]) -> Option<FormKind> {
        candidates
            .iter()
            .copied()
            .find(|kind| kind.spec().matches_title(title))
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a field value is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Value must match `accept` over its whole length and must not contain
    /// a match for `reject`
    Pattern {
        accept: &'static str,
        reject: Option<&'static str>,
    },
    /// Value must contain `[x]` at least once (case-insensitive)
    AnyChecked,
    /// Every non-blank line must be a ticked checklist item
    AllChecked,
}

/// One required field of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// Heading text, without the `### ` marker
    pub name: &'static str,
    pub kind: RuleKind,
    /// Sample value that satisfies the rule, used for body skeletons
    pub example: &'static str,
}

impl FieldRule {
    pub const fn pattern(name: &'static str, accept: &'static str, example: &'static str) -> Self {
        Self {
            name,
            kind: RuleKind::Pattern { accept, reject: None },
            example,
        }
    }

    pub const fn any_checked(name: &'static str, example: &'static str) -> Self {
        Self {
            name,
            kind: RuleKind::AnyChecked,
            example,
        }
    }

    pub const fn all_checked(name: &'static str, example: &'static str) -> Self {
        Self {
            name,
            kind: RuleKind::AllChecked,
            example,
        }
    }

    pub fn rejecting(mut self, reject: &'static str) -> Self {
        if let RuleKind::Pattern { accept, .. } = self.kind {
            self.kind = RuleKind::Pattern {
                accept,
                reject: Some(reject),
            };
        }
        self
    }
}

/// Rules for one issue form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub kind: FormKind,

    /// Issue titles starting with any of these belong to this form
    pub title_prefixes: &'static [&'static str],

    /// Required fields, checked in this order
    pub rules: Vec<FieldRule>,

    /// Comment posted when the body has no form headings at all
    pub wrong_template_message: &'static str,
}

impl FormSpec {
    /// Rules for game catalog submissions
    pub fn game_catalog() -> Self {
        Self {
            kind: FormKind::Game,
            title_prefixes: &["[New Game]:", "[Update Game]:"],
            rules: vec![
                FieldRule::pattern("game_id", r"[a-zA-Z0-9._]+", "my_game"),
                // The class already excludes `/` and `~`; `..` is rejected separately
                FieldRule::pattern("file_name", r"[a-zA-Z0-9._-]+", "my-game.tar.xz")
                    .rejecting(r"\.\."),
                FieldRule::pattern(
                    "source_url",
                    r"https://github\.com/[^/]+/[^/]+/releases/download/.+\.tar\.xz",
                    "https://github.com/owner/repo/releases/download/v1.0.0/my-game.tar.xz",
                ),
                FieldRule::pattern(
                    "sha256",
                    r"[A-Fa-f0-9]{64}",
                    "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08",
                ),
                FieldRule::any_checked("agreements", "- [x] I have the right to distribute this game"),
            ],
            wrong_template_message: "⚠️ This issue doesn’t appear to use the required issue form.\n\
                 Please use the proper issue template so we can process it correctly.",
        }
    }

    /// Rules for bug reports and feature requests
    pub fn issue_report() -> Self {
        Self {
            kind: FormKind::Report,
            title_prefixes: &["[Bug]:", "[Feature Request]:"],
            rules: vec![
                FieldRule::pattern("Email", r"[\w.-]+@[\w.-]+\.\w+", "you@example.com"),
                FieldRule::pattern("URL", r"https?://[^\s]+", "https://example.com/page"),
                FieldRule::pattern("Version", r"\d+\.\d+\.\d+", "1.0.0"),
                FieldRule::pattern(
                    "Steps to Reproduce",
                    r"(?s).+",
                    "1. Open the app\n2. Load a save\n3. Observe the crash",
                ),
                FieldRule::all_checked(
                    "Confirmations",
                    "- [x] I searched existing issues\n- [x] I agree to follow the code of conduct",
                ),
            ],
            wrong_template_message: "⚠️ This issue doesn’t appear to use the required issue form.\n\
                 Please open a new issue using the proper template.",
        }
    }

    pub fn matches_title(&self, title: &str) -> bool {
        self.title_prefixes
            .iter()
            .any(|prefix| title.starts_with(prefix))
    }

    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Generate an issue body that satisfies every rule of this form
    pub fn to_markdown_skeleton(&self) -> String {
        self.rules
            .iter()
            .map(|rule| format!("### {}\n\n{}\n", rule.name, rule.example))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
