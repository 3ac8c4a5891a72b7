pub mod github;
pub mod memory;

use crate::Result;
use async_trait::async_trait;

pub use github::{GitHubReporter, ReporterError, DEFAULT_API_URL};
pub use memory::{RecordingReporter, ReporterAction};

/// Label applied to issues that fail validation
pub const INVALID_LABEL: &str = "invalid";

/// Side effects against the issue that triggered the run
///
/// Each call is independent and best-effort: implementations do not retry,
/// and a rejected request is not an error.
#[async_trait]
pub trait IssueReporter: Send + Sync {
    /// Post a comment with the given markdown body
    async fn comment(&self, body: &str) -> Result<()>;

    /// Attach a label to the issue
    async fn add_label(&self, label: &str) -> Result<()>;

    /// Transition the issue to the closed state
    async fn close(&self) -> Result<()>;
}
