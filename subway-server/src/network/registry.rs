//! In-memory registry of stations and lines.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::cache::{GraphCache, GraphVersion};
use super::error::NetworkError;
use crate::domain::{Distance, Line, LineId, Section, Sections, Station, StationId};
use crate::path::{PathFinder, PathGraph, PathResult};

/// Request to open a new line with its first section.
#[derive(Debug, Clone)]
pub struct NewLine {
    pub name: String,
    pub color: String,
    pub up_station: StationId,
    pub down_station: StationId,
    pub distance: u32,
}

/// Snapshot of a line and its stations in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    pub line: Line,
    pub stations: Vec<Station>,
    pub total_distance: u64,
}

impl LineView {
    fn of(entry: &LineEntry) -> Self {
        Self {
            line: entry.line.clone(),
            stations: entry.sections.stations(),
            total_distance: entry.sections.total_distance(),
        }
    }
}

struct LineEntry {
    line: Line,
    sections: Sections,
}

#[derive(Default)]
struct NetworkState {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, LineEntry>,
    next_station_id: u64,
    next_line_id: u64,
    /// Bumped on every change to any line's sections.
    version: GraphVersion,
}

impl NetworkState {
    fn station(&self, id: StationId) -> Result<Station, NetworkError> {
        self.stations
            .get(&id)
            .cloned()
            .ok_or(NetworkError::StationNotFound(id))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut LineEntry, NetworkError> {
        self.lines.get_mut(&id).ok_or(NetworkError::LineNotFound(id))
    }

    fn check_name_free(&self, name: &str, except: Option<LineId>) -> Result<(), NetworkError> {
        let taken = self
            .lines
            .values()
            .any(|e| e.line.name == name && Some(e.line.id) != except);
        if taken {
            return Err(NetworkError::DuplicateLineName(name.to_string()));
        }
        Ok(())
    }

    fn section(
        &self,
        line: LineId,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<Section, NetworkError> {
        let distance = Distance::new(distance)?;
        Ok(Section::new(
            line,
            self.station(up)?,
            self.station(down)?,
            distance,
        )?)
    }
}

/// Thread-safe registry of the whole subway network.
///
/// All state sits behind one `RwLock`: every edit to a line's sections holds
/// the write lock, so mutations of a line never interleave, and building the
/// combined graph holds the read lock across all lines, so a path query sees
/// one consistent snapshot.
#[derive(Clone)]
pub struct SubwayNetwork {
    state: Arc<RwLock<NetworkState>>,
    graphs: GraphCache,
    finder: PathFinder,
}

impl SubwayNetwork {
    /// Create an empty network caching at most `graph_cache_capacity`
    /// combined graphs.
    pub fn new(graph_cache_capacity: u64) -> Self {
        Self {
            state: Arc::new(RwLock::new(NetworkState::default())),
            graphs: GraphCache::new(graph_cache_capacity),
            finder: PathFinder::new(),
        }
    }

    /// Register a station.
    pub async fn create_station(&self, name: impl Into<String>) -> Station {
        let mut state = self.state.write().await;
        state.next_station_id += 1;
        let station = Station::new(StationId(state.next_station_id), name);
        state.stations.insert(station.id(), station.clone());

        debug!(id = %station.id(), name = %station, "station created");
        station
    }

    /// All registered stations, ordered by id.
    pub async fn stations(&self) -> Vec<Station> {
        let state = self.state.read().await;
        state.stations.values().cloned().collect()
    }

    /// Remove a station that no line uses.
    pub async fn delete_station(&self, id: StationId) -> Result<(), NetworkError> {
        let mut state = self.state.write().await;
        let station = state.station(id)?;
        if let Some(entry) = state
            .lines
            .values()
            .find(|e| e.sections.contains_station(&station))
        {
            return Err(NetworkError::StationInUse {
                station: id,
                line: entry.line.id,
            });
        }
        state.stations.remove(&id);

        debug!(id = %id, "station deleted");
        Ok(())
    }

    /// Open a line with a single section.
    pub async fn create_line(&self, request: NewLine) -> Result<LineView, NetworkError> {
        let mut state = self.state.write().await;
        state.check_name_free(&request.name, None)?;

        let id = LineId(state.next_line_id + 1);
        let section = state.section(
            id,
            request.up_station,
            request.down_station,
            request.distance,
        )?;
        let mut sections = Sections::empty();
        sections.add_station(section)?;

        state.next_line_id = id.0;
        state.version += 1;
        let entry = LineEntry {
            line: Line::new(id, request.name, request.color),
            sections,
        };
        let view = LineView::of(&entry);
        state.lines.insert(id, entry);

        info!(id = %id, name = %view.line, "line created");
        Ok(view)
    }

    /// All lines, ordered by id.
    pub async fn lines(&self) -> Vec<LineView> {
        let state = self.state.read().await;
        state.lines.values().map(LineView::of).collect()
    }

    pub async fn line(&self, id: LineId) -> Result<LineView, NetworkError> {
        let state = self.state.read().await;
        state
            .lines
            .get(&id)
            .map(LineView::of)
            .ok_or(NetworkError::LineNotFound(id))
    }

    /// Rename or recolor a line.
    pub async fn update_line(
        &self,
        id: LineId,
        name: String,
        color: String,
    ) -> Result<LineView, NetworkError> {
        let mut state = self.state.write().await;
        if !state.lines.contains_key(&id) {
            return Err(NetworkError::LineNotFound(id));
        }
        state.check_name_free(&name, Some(id))?;
        let entry = state.line_mut(id)?;
        entry.line.update(name, color);

        debug!(id = %id, name = %entry.line, "line updated");
        Ok(LineView::of(entry))
    }

    pub async fn delete_line(&self, id: LineId) -> Result<(), NetworkError> {
        let mut state = self.state.write().await;
        let entry = state
            .lines
            .remove(&id)
            .ok_or(NetworkError::LineNotFound(id))?;
        state.version += 1;

        info!(id = %id, name = %entry.line, "line deleted");
        Ok(())
    }

    /// Insert a section into a line, extending it or splitting an existing
    /// section.
    pub async fn add_section(
        &self,
        line: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<LineView, NetworkError> {
        let mut state = self.state.write().await;
        let section = state.section(line, up_station, down_station, distance)?;
        let entry = state.line_mut(line)?;
        entry.sections.add_station(section)?;
        let view = LineView::of(entry);
        state.version += 1;

        debug!(
            line = %line,
            up = %up_station,
            down = %down_station,
            distance,
            "section added"
        );
        Ok(view)
    }

    /// Remove a station from a line.
    pub async fn remove_station(
        &self,
        line: LineId,
        station: StationId,
    ) -> Result<(), NetworkError> {
        let mut state = self.state.write().await;
        let station = state.station(station)?;
        state.line_mut(line)?.sections.remove_station(&station)?;
        state.version += 1;

        debug!(line = %line, station = %station.id(), "station removed from line");
        Ok(())
    }

    /// The combined graph of every line, built from a consistent snapshot.
    pub async fn graph(&self) -> Arc<PathGraph> {
        let state = self.state.read().await;
        if let Some(graph) = self.graphs.get(state.version).await {
            return graph;
        }

        let graph = Arc::new(PathGraph::from_collections(
            state.lines.values().map(|e| &e.sections),
        ));
        self.graphs.insert(state.version, graph.clone()).await;

        debug!(
            version = state.version,
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "combined graph rebuilt"
        );
        graph
    }

    /// Shortest route between two registered stations.
    pub async fn find_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<PathResult, NetworkError> {
        let (source, target) = {
            let state = self.state.read().await;
            (state.station(source)?, state.station(target)?)
        };
        let graph = self.graph().await;
        Ok(self.finder.find_path(&graph, &source, &target)?)
    }
}

impl Default for SubwayNetwork {
    fn default() -> Self {
        Self::new(4)
    }
}
