use serde::{Deserialize, Serialize};

/// The issue that triggered this run
///
/// Built once from flags or the workflow environment and passed by reference
/// into every stage; nothing mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueContext {
    /// `owner/name` slug of the repository
    pub repository: String,
    pub number: u64,
    pub title: String,
    /// Raw markdown body as submitted
    pub body: String,
}

impl IssueContext {
    pub fn new(
        repository: impl Into<String>,
        number: u64,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            number,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Short label for log lines, e.g. `owner/repo#42`
    pub fn reference(&self) -> String {
        format!("{}#{}", self.repository, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference() {
        let issue = IssueContext::new("acme/games", 42, "[Bug]: crash", "");
        assert_eq!(issue.reference(), "acme/games#42");
    }
}
