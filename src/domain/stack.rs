//! Stack domain types and pure status logic.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

// ── Parameters ────────────────────────────────────────────────────────────────

/// A parameter declared by a template, as reported by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    /// Parameter key, e.g. `"KeyName"`.
    pub key: String,
    /// Default value declared by the template, if any.
    pub default_value: Option<String>,
    /// Human-readable description from the template, if any.
    pub description: Option<String>,
    /// Whether the declared default should be hidden when prompting (`NoEcho`).
    pub sensitive: bool,
}

/// A parameter with its final value, ready to send with a create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameter {
    pub key: String,
    pub value: String,
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Lifecycle status reported by the provider for a stack.
///
/// Unrecognized status strings are preserved verbatim in `Other` so the
/// in-progress rule below keeps working for statuses this build doesn't
/// know by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackStatus {
    CreateInProgress,
    CreateComplete,
    CreateFailed,
    RollbackInProgress,
    RollbackComplete,
    RollbackFailed,
    DeleteInProgress,
    DeleteComplete,
    DeleteFailed,
    Other(String),
}

impl StackStatus {
    /// The provider's canonical string for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::CreateFailed => "CREATE_FAILED",
            Self::RollbackInProgress => "ROLLBACK_IN_PROGRESS",
            Self::RollbackComplete => "ROLLBACK_COMPLETE",
            Self::RollbackFailed => "ROLLBACK_FAILED",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::Other(s) => s,
        }
    }

    /// Whether the provider is still working on the stack.
    ///
    /// Decided by the `_IN_PROGRESS` suffix rather than by enumerating
    /// variants, so update and review statuses reported as `Other` are
    /// treated as in-progress too.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.as_str().ends_with("_IN_PROGRESS")
    }

    /// Whether this status means the last operation did not succeed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.as_str().ends_with("_FAILED") || self.as_str().starts_with("ROLLBACK")
    }
}

impl From<&str> for StackStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATE_IN_PROGRESS" => Self::CreateInProgress,
            "CREATE_COMPLETE" => Self::CreateComplete,
            "CREATE_FAILED" => Self::CreateFailed,
            "ROLLBACK_IN_PROGRESS" => Self::RollbackInProgress,
            "ROLLBACK_COMPLETE" => Self::RollbackComplete,
            "ROLLBACK_FAILED" => Self::RollbackFailed,
            "DELETE_IN_PROGRESS" => Self::DeleteInProgress,
            "DELETE_COMPLETE" => Self::DeleteComplete,
            "DELETE_FAILED" => Self::DeleteFailed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for StackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StackStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ── Descriptors ───────────────────────────────────────────────────────────────

/// A single output exported by a stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Provider-reported description of a stack.
#[derive(Debug, Clone, Serialize)]
pub struct StackDescriptor {
    /// Stack name, e.g. `"KilnStack"`.
    pub name: String,
    /// Provider-assigned stack identifier.
    pub id: String,
    /// Current lifecycle status.
    pub status: StackStatus,
    /// Outputs exported by the stack.
    pub outputs: Vec<StackOutput>,
    /// When the stack was created, if the provider reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
