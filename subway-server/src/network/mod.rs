//! In-memory host for the subway network.
//!
//! Owns the station and line records together with each line's section
//! collection, serialises edits, and answers path queries against a cached
//! combined graph.

mod cache;
mod error;
mod registry;

pub use cache::{GraphCache, GraphVersion};
pub use error::NetworkError;
pub use registry::{LineView, NewLine, SubwayNetwork};
