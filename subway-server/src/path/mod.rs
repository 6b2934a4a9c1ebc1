//! Shortest-path search across all lines.
//!
//! Every line's [`Sections`](crate::domain::Sections) are folded into one
//! undirected weighted multigraph, which [`PathFinder`] searches with
//! Dijkstra's algorithm.

mod finder;
mod graph;

pub use finder::{PathError, PathFinder, PathResult};
pub use graph::{PathGraph, PathGraphBuilder};
