use crate::record::StatusId;
use thiserror::Error;

/// Errors surfaced by the breakdown builder.
///
/// The default pipeline is total; errors only arise when a caller opts in
/// to strict handling of unresolved status references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollupError {
    /// A record references a status the data-access layer could not
    /// resolve, and the build was configured to reject that.
    #[error("record {record_id} references unresolved status {status_id}")]
    UnresolvedStatus {
        record_id: String,
        status_id: StatusId,
    },
}
