//! Shortest-path search over the combined network graph.

use pathfinding::prelude::dijkstra;
use tracing::debug;

use super::graph::PathGraph;
use crate::domain::Station;

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A requested station is not served by any line
    #[error("station {0} is not on any line")]
    StationNotFound(Station),

    /// Source and target are the same station
    #[error("source and target are the same station: {0}")]
    SameStation(Station),

    /// Source and target are in disconnected parts of the network
    #[error("no route from {from} to {to}")]
    NoRoute { from: Station, to: Station },
}

/// Shortest route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    stations: Vec<Station>,
    distance: u64,
}

impl PathResult {
    /// Stations from source to target, both included.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Total distance along the route.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn into_parts(self) -> (Vec<Station>, u64) {
        (self.stations, self.distance)
    }
}

/// Finds minimum-distance routes with Dijkstra's algorithm.
///
/// Stateless: one finder can serve any number of graphs and concurrent
/// queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> Self {
        Self
    }

    /// Find the shortest route from `source` to `target`.
    ///
    /// When several routes share the minimum distance any one of them is
    /// returned.
    pub fn find_path(
        &self,
        graph: &PathGraph,
        source: &Station,
        target: &Station,
    ) -> Result<PathResult, PathError> {
        for station in [source, target] {
            if !graph.contains_station(station) {
                return Err(PathError::StationNotFound(station.clone()));
            }
        }
        if source == target {
            return Err(PathError::SameStation(source.clone()));
        }

        let (stations, distance) = dijkstra(
            source,
            |station| {
                graph
                    .neighbors(station)
                    .iter()
                    .map(|(next, d)| (next.clone(), u64::from(d.get())))
                    .collect::<Vec<_>>()
            },
            |station| station == target,
        )
        .ok_or_else(|| PathError::NoRoute {
            from: source.clone(),
            to: target.clone(),
        })?;

        debug!(
            source = %source,
            target = %target,
            hops = stations.len() - 1,
            distance,
            "path found"
        );

        Ok(PathResult { stations, distance })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Distance, LineId, Section, Sections, StationId};
    use crate::path::PathGraphBuilder;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const STATIONS: u64 = 6;

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    /// Random edges over a small station set, each a single-section line.
    fn edges() -> impl Strategy<Value = Vec<(u64, u64, u32)>> {
        proptest::collection::vec((0..STATIONS, 0..STATIONS, 1u32..20), 1..12)
            .prop_map(|edges| edges.into_iter().filter(|(a, b, _)| a != b).collect())
    }

    fn build(edges: &[(u64, u64, u32)]) -> PathGraph {
        edges
            .iter()
            .enumerate()
            .map(|(i, (a, b, d))| {
                let section = Section::new(
                    LineId(i as u64),
                    station(*a),
                    station(*b),
                    Distance::new(*d).unwrap(),
                )
                .unwrap();
                Sections::from(vec![section])
            })
            .fold(PathGraphBuilder::new(), |builder, line| {
                builder.add_sections(&line)
            })
            .build()
    }

    /// Minimum distance over every simple path, by exhaustive search.
    fn brute_force(graph: &PathGraph, source: &Station, target: &Station) -> Option<u64> {
        fn walk(
            graph: &PathGraph,
            at: &Station,
            target: &Station,
            visited: &mut HashSet<Station>,
            so_far: u64,
            best: &mut Option<u64>,
        ) {
            if at == target {
                *best = Some(best.map_or(so_far, |b| b.min(so_far)));
                return;
            }
            for (next, d) in graph.neighbors(at) {
                if visited.insert(next.clone()) {
                    walk(graph, next, target, visited, so_far + u64::from(d.get()), best);
                    visited.remove(next);
                }
            }
        }

        let mut best = None;
        let mut visited = HashSet::from([source.clone()]);
        walk(graph, source, target, &mut visited, 0, &mut best);
        best
    }

    proptest! {
        #[test]
        fn matches_brute_force(
            edges in edges(),
            source in 0..STATIONS,
            target in 0..STATIONS,
        ) {
            let graph = build(&edges);
            let source = station(source);
            let target = station(target);
            prop_assume!(source != target);
            prop_assume!(graph.contains_station(&source) && graph.contains_station(&target));

            let expected = brute_force(&graph, &source, &target);
            let actual = PathFinder::new().find_path(&graph, &source, &target);

            match (expected, actual) {
                (None, Err(PathError::NoRoute { .. })) => {}
                (Some(best), Ok(result)) => {
                    prop_assert_eq!(result.distance(), best);

                    let stations = result.stations();
                    prop_assert_eq!(stations.first(), Some(&source));
                    prop_assert_eq!(stations.last(), Some(&target));

                    let walked: u64 = stations
                        .windows(2)
                        .map(|pair| graph.edge_weight(&pair[0], &pair[1]).unwrap())
                        .map(|d| u64::from(d.get()))
                        .sum();
                    prop_assert_eq!(walked, result.distance());
                }
                (expected, actual) => {
                    prop_assert!(false, "brute force {:?} but finder {:?}", expected, actual);
                }
            }
        }
    }
}
