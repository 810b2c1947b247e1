//! Derived status summaries over a built breakdown.

use serde::{Deserialize, Serialize};

use crate::breakdown::{build_breakdown, Breakdown, BreakdownEntry};
use crate::format::{format_breakdown, Locale};
use crate::record::ChildRecord;

/// First entry of the breakdown, i.e. the status carried by the most
/// child records. Relies on the builder's sort order; never re-sorts.
pub fn most_common_status(breakdown: &Breakdown) -> Option<&BreakdownEntry> {
    breakdown.entries().first()
}

/// True when every counted record carries the same status.
pub fn is_uniform_status(breakdown: &Breakdown) -> bool {
    breakdown.len() == 1
}

/// Display color of the most common status, when one is configured.
pub fn status_color(breakdown: &Breakdown) -> Option<&str> {
    most_common_status(breakdown).and_then(|entry| entry.color.as_deref())
}

/// Derived status summary for one main process, ready to attach to a
/// listing or detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRollup {
    /// Human-readable distribution line in the requested locale.
    pub text: String,
    pub locale: Locale,
    pub breakdown: Breakdown,
    pub uniform: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StatusRollup {
    /// Aggregates child records with the default breakdown configuration.
    pub fn from_records(records: &[ChildRecord], locale: Locale) -> Self {
        Self::from_breakdown(build_breakdown(records), locale)
    }

    pub fn from_breakdown(breakdown: Breakdown, locale: Locale) -> Self {
        Self {
            text: format_breakdown(&breakdown, locale),
            uniform: is_uniform_status(&breakdown),
            color: status_color(&breakdown).map(str::to_string),
            locale,
            breakdown,
        }
    }
}
