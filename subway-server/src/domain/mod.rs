//! Domain types for the subway network.
//!
//! Stations and lines are plain identity records. The interesting invariants
//! live in [`Section`] and [`Sections`]: every line's sections form a single
//! simple path, and every edit either keeps it that way or is rejected
//! without changing anything.

mod distance;
mod error;
mod line;
mod section;
mod sections;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use error::SectionError;
pub use line::{Line, LineId};
pub use section::Section;
pub use sections::Sections;
pub use station::{Station, StationId};
