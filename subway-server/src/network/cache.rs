//! Cache of combined network graphs.
//!
//! The combined graph depends on every line's sections. Rather than tracking
//! which lines changed, the registry bumps a single version counter on every
//! section mutation and the cache is keyed by that version, so a stale graph
//! can never be returned. Old versions simply age out under the capacity
//! bound.

use std::sync::Arc;

use moka::future::Cache as MokaCache;

use crate::path::PathGraph;

/// Network version the graph was built from.
pub type GraphVersion = u64;

/// Cached graphs keyed by network version.
#[derive(Clone)]
pub struct GraphCache {
    graphs: MokaCache<GraphVersion, Arc<PathGraph>>,
}

impl GraphCache {
    /// Create a cache holding at most `max_capacity` graphs.
    pub fn new(max_capacity: u64) -> Self {
        Self {
            graphs: MokaCache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Get the graph for a version, if cached.
    pub async fn get(&self, version: GraphVersion) -> Option<Arc<PathGraph>> {
        self.graphs.get(&version).await
    }

    /// Insert the graph built for a version.
    pub async fn insert(&self, version: GraphVersion, graph: Arc<PathGraph>) {
        self.graphs.insert(version, graph).await;
    }

    /// Number of cached graphs (for monitoring; eventually consistent).
    pub fn entry_count(&self) -> u64 {
        self.graphs.entry_count()
    }
}
