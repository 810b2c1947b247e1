use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the breakdown builder treats a record whose status reference did
/// not resolve to a status entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedPolicy {
    /// Drop the record, exactly like a record with no status assigned.
    #[default]
    Skip,
    /// Count the record under a synthetic "unknown status" entry.
    Bucket,
    /// Fail the build on the first unresolved reference.
    Deny,
}

/// Configuration for one breakdown build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownConfig {
    #[serde(default)]
    pub unresolved: UnresolvedPolicy,
}

impl BreakdownConfig {
    pub fn new(unresolved: UnresolvedPolicy) -> Self {
        Self { unresolved }
    }

    /// Unresolved references are dropped (the default).
    pub fn skipping() -> Self {
        Self::new(UnresolvedPolicy::Skip)
    }

    /// Surface unresolved references as an "unknown status" entry.
    pub fn bucketing() -> Self {
        Self::new(UnresolvedPolicy::Bucket)
    }

    /// Reject inputs containing unresolved references.
    pub fn denying() -> Self {
        Self::new(UnresolvedPolicy::Deny)
    }
}
