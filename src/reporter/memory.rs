use super::IssueReporter;
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Mutex;

/// One call made against the issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ReporterAction {
    Comment(String),
    Label(String),
    Close,
}

impl ReporterAction {
    /// One-line description for dry-run output
    pub fn describe(&self) -> String {
        match self {
            ReporterAction::Comment(body) => {
                let first_line = body.lines().next().unwrap_or_default();
                format!("comment: {}", first_line)
            }
            ReporterAction::Label(label) => format!("label: {}", label),
            ReporterAction::Close => "close".to_string(),
        }
    }
}

/// Reporter that keeps every action in memory instead of sending it
///
/// Backs `--dry-run` and the test suite.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    actions: Mutex<Vec<ReporterAction>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions recorded so far, in call order
    pub fn actions(&self) -> Vec<ReporterAction> {
        self.lock().clone()
    }

    pub fn comments(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|action| match action {
                ReporterAction::Comment(body) => Some(body.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn record(&self, action: ReporterAction) {
        self.lock().push(action);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReporterAction>> {
        // A poisoned log is still a valid log
        self.actions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl IssueReporter for RecordingReporter {
    async fn comment(&self, body: &str) -> Result<()> {
        self.record(ReporterAction::Comment(body.to_string()));
        Ok(())
    }

    async fn add_label(&self, label: &str) -> Result<()> {
        self.record(ReporterAction::Label(label.to_string()));
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.record(ReporterAction::Close);
        Ok(())
    }
}
