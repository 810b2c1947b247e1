//! Status aggregation for case-management processes.
//!
//! A main (collective) process owns child records, each optionally joined
//! to a status entity by the data-access layer. This crate turns that
//! record set into a sorted [`Breakdown`], a locale-aware summary line,
//! and a serializable [`StatusRollup`] payload for listing and detail
//! responses. The pipeline is pure and allocation-only: records in,
//! values out, no I/O and no shared state.

pub mod breakdown;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod rollup;

// Re-export commonly used types
pub use crate::breakdown::{
    build_breakdown, build_breakdown_with, Breakdown, BreakdownEntry, UNKNOWN_STATUS_ID,
};
pub use crate::config::{BreakdownConfig, UnresolvedPolicy};
pub use crate::error::RollupError;
pub use crate::format::{format_breakdown, Locale};
pub use crate::record::{ChildRecord, StatusEntity, StatusId, StatusRef};
pub use crate::rollup::{is_uniform_status, most_common_status, status_color, StatusRollup};
