//! Grouping pass from child records to a sorted status breakdown.
//!
//! This is the single pass the process listing and detail payloads are
//! built from: group records by status id, count occurrences, capture the
//! display names and color the first time a status is seen, then sort.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{BreakdownConfig, UnresolvedPolicy};
use crate::error::RollupError;
use crate::record::{ChildRecord, StatusId, StatusRef};

/// Identifier of the synthetic entry that collects unresolved references
/// under [`UnresolvedPolicy::Bucket`].
pub const UNKNOWN_STATUS_ID: &str = "unknown";

const UNKNOWN_STATUS_NAME: &str = "Status desconhecido";
const UNKNOWN_STATUS_NAME_EN: &str = "Unknown status";

/// Aggregated (status, count) pair derived from a set of child records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub status_id: StatusId,
    /// Display name in the back office's default language.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    /// Display color of the status, captured when the entry is first seen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub count: usize,
}

/// Sorted status distribution of one main process's children.
///
/// Entries partition the counted records: one entry per distinct status
/// id with its exact occurrence count. Ordered by count descending, ties
/// by default-locale name ascending, then by status id; repeated builds
/// over equal input are element-wise equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown {
    entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreakdownEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<BreakdownEntry> {
        self.entries
    }

    /// Total number of records the breakdown accounts for.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = &'a BreakdownEntry;
    type IntoIter = std::slice::Iter<'a, BreakdownEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a breakdown with the default configuration: records without a
/// status are skipped, and unresolved references are treated the same
/// way. Single pass over the input, cannot fail.
pub fn build_breakdown(records: &[ChildRecord]) -> Breakdown {
    let (breakdown, _) = accumulate(records, UnresolvedPolicy::Skip);
    breakdown
}

/// Builds a breakdown under an explicit [`BreakdownConfig`].
///
/// Only [`UnresolvedPolicy::Deny`] introduces a failure path; the other
/// policies are total.
pub fn build_breakdown_with(
    records: &[ChildRecord],
    config: &BreakdownConfig,
) -> Result<Breakdown, RollupError> {
    let (breakdown, first_unresolved) = accumulate(records, config.unresolved);
    if config.unresolved == UnresolvedPolicy::Deny {
        if let Some((record_id, status_id)) = first_unresolved {
            return Err(RollupError::UnresolvedStatus {
                record_id,
                status_id,
            });
        }
    }
    Ok(breakdown)
}

/// The grouping pass. Returns the sorted breakdown plus the first
/// unresolved reference seen, which `Deny` turns into an error.
fn accumulate(
    records: &[ChildRecord],
    policy: UnresolvedPolicy,
) -> (Breakdown, Option<(String, StatusId)>) {
    let mut groups: HashMap<StatusId, BreakdownEntry> = HashMap::new();
    let mut first_unresolved = None;

    for record in records {
        match &record.status {
            None => {}
            Some(StatusRef::Resolved(status)) => {
                groups
                    .entry(status.id.clone())
                    .or_insert_with(|| BreakdownEntry {
                        status_id: status.id.clone(),
                        name: status.name.clone(),
                        name_en: status.name_en.clone(),
                        color: status.color.clone(),
                        count: 0,
                    })
                    .count += 1;
            }
            Some(StatusRef::Dangling(status_id)) => {
                if first_unresolved.is_none() {
                    first_unresolved = Some((record.id.clone(), status_id.clone()));
                }
                match policy {
                    UnresolvedPolicy::Bucket => {
                        groups
                            .entry(StatusId::new(UNKNOWN_STATUS_ID))
                            .or_insert_with(unknown_entry)
                            .count += 1;
                    }
                    UnresolvedPolicy::Skip | UnresolvedPolicy::Deny => {
                        debug!(
                            "record {} references unresolved status {}; dropping from breakdown",
                            record.id, status_id
                        );
                    }
                }
            }
        }
    }

    let mut entries: Vec<BreakdownEntry> = groups.into_values().collect();
    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.status_id.cmp(&b.status_id))
    });

    (Breakdown { entries }, first_unresolved)
}

fn unknown_entry() -> BreakdownEntry {
    BreakdownEntry {
        status_id: StatusId::new(UNKNOWN_STATUS_ID),
        name: UNKNOWN_STATUS_NAME.to_string(),
        name_en: Some(UNKNOWN_STATUS_NAME_EN.to_string()),
        color: None,
        count: 0,
    }
}
