use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LabelError;

/// Labels GitHub creates automatically for every new repository
pub const DEFAULT_LABELS: [&str; 9] = [
    "bug",
    "duplicate",
    "enhancement",
    "good first issue",
    "help wanted",
    "invalid",
    "documentation",
    "question",
    "wontfix",
];

// ========== Repository ==========

/// Repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepositoryId {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            LabelError::InvalidInput(format!(
                "Invalid repository '{}'. Expected 'owner/name' format.",
                s
            ))
        };

        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        let valid_part = |part: &str| !part.is_empty() && !part.contains(char::is_whitespace);

        if !valid_part(owner) || !valid_part(name) || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// ========== Labels ==========

/// A label to delete. Only the name is used to address it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub name: String,
    /// Color hint WITHOUT `#` prefix; ignored by deletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LabelSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The default label set as label specs, in GitHub's order
pub fn default_labels() -> Vec<LabelSpec> {
    DEFAULT_LABELS.iter().map(|name| LabelSpec::new(*name)).collect()
}

// ========== Outcomes ==========

/// Result of one delete attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeletionOutcome {
    Deleted,
    /// The label was already gone
    NotFound,
    Failed { reason: String },
}

impl DeletionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, DeletionOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: DeletionOutcome,
}

/// Outcomes of a whole batch, in attempt order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub results: Vec<LabelResult>,
}

impl BatchResult {
    pub fn push(&mut self, name: impl Into<String>, outcome: DeletionOutcome) {
        self.results.push(LabelResult {
            name: name.into(),
            outcome,
        });
    }

    /// True when nothing failed. Missing labels count as success.
    pub fn success(&self) -> bool {
        !self.results.iter().any(|r| r.outcome.is_failure())
    }

    pub fn deleted(&self) -> impl Iterator<Item = &LabelResult> {
        self.results
            .iter()
            .filter(|r| r.outcome == DeletionOutcome::Deleted)
    }

    pub fn not_found(&self) -> impl Iterator<Item = &LabelResult> {
        self.results
            .iter()
            .filter(|r| r.outcome == DeletionOutcome::NotFound)
    }

    pub fn failures(&self) -> impl Iterator<Item = &LabelResult> {
        self.results.iter().filter(|r| r.outcome.is_failure())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repository_id() {
        let repo: RepositoryId = "octocat/hello-world".parse().unwrap();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }

    #[test]
    fn test_parse_repository_id_rejects_malformed() {
        for input in ["", "octocat", "/repo", "owner/", "a/b/c", "own er/repo", "owner/re po"] {
            assert!(
                input.parse::<RepositoryId>().is_err(),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_default_labels_order() {
        let labels = default_labels();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0].name, "bug");
        assert_eq!(labels[3].name, "good first issue");
        assert_eq!(labels[8].name, "wontfix");
        assert!(labels.iter().all(|l| l.color.is_none()));
    }

    #[test]
    fn test_batch_success_treats_not_found_as_ok() {
        let mut batch = BatchResult::default();
        batch.push("bug", DeletionOutcome::Deleted);
        batch.push("wontfix", DeletionOutcome::NotFound);
        assert!(batch.success());
        assert_eq!(batch.deleted().count(), 1);
        assert_eq!(batch.not_found().count(), 1);

        batch.push(
            "question",
            DeletionOutcome::Failed {
                reason: "API error (500): boom".to_string(),
            },
        );
        assert!(!batch.success());
        assert_eq!(batch.failures().count(), 1);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let result = LabelResult {
            name: "bug".to_string(),
            outcome: DeletionOutcome::Failed {
                reason: "HTTP error: timed out".to_string(),
            },
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "bug");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "HTTP error: timed out");
    }
}
