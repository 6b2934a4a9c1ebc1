//! Network registry error types.

use crate::domain::{InvalidDistance, LineId, SectionError, StationId};
use crate::path::PathError;

/// Errors from operations on the network registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// No station registered under this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line registered under this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// Line names are unique
    #[error("a line named {0:?} already exists")]
    DuplicateLineName(String),

    /// Station is still part of a line
    #[error("station {station} is still on line {line}")]
    StationInUse { station: StationId, line: LineId },

    /// Distance was not positive
    #[error(transparent)]
    InvalidDistance(#[from] InvalidDistance),

    /// Rejected topology edit
    #[error(transparent)]
    Section(#[from] SectionError),

    /// Path search failed
    #[error(transparent)]
    Path(#[from] PathError),
}
