//! Input model for status aggregation.
//!
//! These types are snapshots handed in by the data-access layer after it has
//! fetched a main process's children and joined each one to its status row.
//! Nothing here is persisted or mutated by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a status entity. The persistence layer owns the format;
/// it is opaque here and only used for grouping and tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(String);

impl StatusId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StatusId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StatusId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Reference-data row describing a named workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntity {
    pub id: StatusId,
    /// Display name in the back office's default language.
    pub name: String,
    /// English display name, when a translation exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    /// Display color tag (e.g. a hex value), when one is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StatusEntity {
    pub fn new(id: impl Into<StatusId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_en: None,
            color: None,
        }
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A record's status slot once the data-access layer has tried to resolve
/// it. `Dangling` keeps "assigned but the status row is gone" distinct from
/// "no status assigned" (`None` on [`ChildRecord::status`]).
///
/// Serialized untagged: a resolved status is the full entity object, a
/// dangling reference is the bare status id string the join left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusRef {
    Resolved(StatusEntity),
    Dangling(StatusId),
}

/// One unit of work (e.g. an individual applicant's case), treated as an
/// immutable snapshot for the duration of one aggregation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusRef>,
}

impl ChildRecord {
    /// Record with no status assigned.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: None,
        }
    }

    pub fn with_status(id: impl Into<String>, status: StatusEntity) -> Self {
        Self {
            id: id.into(),
            status: Some(StatusRef::Resolved(status)),
        }
    }

    pub fn with_dangling(id: impl Into<String>, status_id: impl Into<StatusId>) -> Self {
        Self {
            id: id.into(),
            status: Some(StatusRef::Dangling(status_id.into())),
        }
    }
}
