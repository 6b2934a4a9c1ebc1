//! Domain error types.
//!
//! These errors represent topology edits that would break a line's
//! simple-path shape. Every operation that returns one leaves its receiver
//! unchanged.

use super::{Distance, Station};

/// Rejected edit of a section or a line's section collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// A section must connect two different stations
    #[error("section must connect two different stations, got {0} twice")]
    SameStation(Station),

    /// Split attempted with a section that shares no endpoint
    #[error("section must be overlapped to divide")]
    NotOverlapped,

    /// Split attempted with a section that is not strictly shorter
    #[error("inserted distance {requested} must be shorter than the existing distance {existing}")]
    DistanceNotShorter {
        existing: Distance,
        requested: Distance,
    },

    /// Merge attempted on sections that do not meet end to end
    #[error("section cannot be connected")]
    NotAdjacent,

    /// Merged distance would not fit in a section
    #[error("merged distance {first} + {second} is too large")]
    DistanceOverflow { first: Distance, second: Distance },

    /// Neither endpoint of the new section is on the line
    #[error("neither {up} nor {down} is on the line")]
    Disconnected { up: Station, down: Station },

    /// Both endpoints of the new section are already on the line
    #[error("{up} and {down} are both already on the line")]
    AlreadyRegistered { up: Station, down: Station },

    /// A line must keep at least one section
    #[error("cannot remove a station from a line with a single section")]
    LastSection,

    /// The station to remove is not on the line
    #[error("station {0} is not on the line")]
    StationNotOnLine(Station),
}
