//! Combined weighted multigraph over every line's sections.

use std::collections::HashMap;

use crate::domain::{Distance, Section, Sections, Station};

/// Undirected weighted multigraph of stations.
///
/// Each section contributes one edge, traversable in both directions. Parallel
/// edges (two lines running between the same pair of stations) are kept. The
/// graph is read-only once built; construct it with [`PathGraphBuilder`] or
/// [`PathGraph::from_collections`].
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    adjacency: HashMap<Station, Vec<(Station, Distance)>>,
    edge_count: usize,
}

impl PathGraph {
    /// Build the graph for a set of lines.
    ///
    /// # Example
    ///
    /// ```
    /// use subway_server::domain::{Distance, LineId, Section, Sections, Station, StationId};
    /// use subway_server::path::PathGraph;
    ///
    /// let a = Station::new(StationId(1), "A");
    /// let b = Station::new(StationId(2), "B");
    /// let c = Station::new(StationId(3), "C");
    /// let line = |id, up: &Station, down: &Station, d| {
    ///     let section = Section::new(LineId(id), up.clone(), down.clone(), Distance::new(d).unwrap());
    ///     Sections::from(vec![section.unwrap()])
    /// };
    ///
    /// let graph = PathGraph::from_collections([&line(1, &a, &b, 3), &line(2, &b, &c, 4)]);
    /// assert_eq!(graph.station_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_collections<'a, I>(collections: I) -> Self
    where
        I: IntoIterator<Item = &'a Sections>,
    {
        collections
            .into_iter()
            .fold(PathGraphBuilder::new(), PathGraphBuilder::add_sections)
            .build()
    }

    pub fn contains_station(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.adjacency.keys()
    }

    /// Stations one edge away from `station`, with the edge weight.
    ///
    /// A neighbour appears once per parallel edge.
    pub fn neighbors(&self, station: &Station) -> &[(Station, Distance)] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lightest edge between two stations, if they are adjacent.
    pub fn edge_weight(&self, from: &Station, to: &Station) -> Option<Distance> {
        self.neighbors(from)
            .iter()
            .filter(|(s, _)| s == to)
            .map(|(_, d)| *d)
            .min()
    }
}

/// Builder for a [`PathGraph`].
#[derive(Debug, Default)]
pub struct PathGraphBuilder {
    inner: PathGraph,
}

impl PathGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one edge for `section`, creating its vertices as needed.
    pub fn add_section(mut self, section: &Section) -> Self {
        let (up, down) = section.stations();
        let distance = section.distance();
        self.inner
            .adjacency
            .entry(up.clone())
            .or_default()
            .push((down.clone(), distance));
        self.inner
            .adjacency
            .entry(down.clone())
            .or_default()
            .push((up.clone(), distance));
        self.inner.edge_count += 1;
        self
    }

    /// Add every section of a line.
    pub fn add_sections(self, sections: &Sections) -> Self {
        sections.iter().fold(self, Self::add_section)
    }

    pub fn build(self) -> PathGraph {
        self.inner
    }
}
