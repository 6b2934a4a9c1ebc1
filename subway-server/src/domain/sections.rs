//! The section collection of a single line.
//!
//! A line's sections always form one simple path: one start terminus with no
//! incoming section, one end terminus with no outgoing section, and every
//! other station entered and left exactly once. `add_station` and
//! `remove_station` are the only mutations and each either succeeds with the
//! path intact or fails with the collection unchanged.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::{Section, SectionError, Station};
use crate::path::{PathGraph, PathGraphBuilder};

/// All sections of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// A collection with no sections.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    /// True if any section starts or ends at `station`.
    pub fn contains_station(&self, station: &Station) -> bool {
        self.sections.iter().any(|s| s.contains(station))
    }

    /// The line's stations in travel order, starting from the terminus with
    /// no incoming section.
    ///
    /// Returns an empty list when there are no sections. The walk is bounded
    /// by the section count and never revisits a station, so it terminates
    /// even on a malformed set handed to [`Sections::from`].
    pub fn stations(&self) -> Vec<Station> {
        let Some(first) = self.sections.first() else {
            return Vec::new();
        };

        let by_up: HashMap<&Station, &Section> =
            self.sections.iter().map(|s| (s.up_station(), s)).collect();
        let by_down: HashMap<&Station, &Section> =
            self.sections.iter().map(|s| (s.down_station(), s)).collect();

        let mut start = first.up_station();
        for _ in 0..self.sections.len() {
            match by_down.get(start) {
                Some(previous) => start = previous.up_station(),
                None => break,
            }
        }

        let mut stations = vec![start.clone()];
        let mut visited: HashSet<&Station> = HashSet::from([start]);
        let mut current = start;
        while let Some(next) = by_up.get(current) {
            let down = next.down_station();
            if !visited.insert(down) {
                break;
            }
            stations.push(down.clone());
            current = down;
        }
        stations
    }

    /// Insert a section into the line.
    ///
    /// The first section of an empty line is always accepted. Otherwise
    /// exactly one endpoint of `section` must already be on the line: the
    /// new section either extends a terminus or is cut out of the existing
    /// section that starts (or ends) at the shared station.
    pub fn add_station(&mut self, section: Section) -> Result<(), SectionError> {
        if !self.sections.is_empty() {
            self.check_can_add(&section)?;

            if let Some(idx) = self.position(|s| s.has_up_station(section.up_station())) {
                self.sections[idx].divide_by(&section)?;
            }
            if let Some(idx) = self.position(|s| s.has_down_station(section.down_station())) {
                self.sections[idx].divide_by(&section)?;
            }
        }

        trace!(
            up = %section.up_station(),
            down = %section.down_station(),
            distance = section.distance().get(),
            "section added"
        );
        self.sections.push(section);
        Ok(())
    }

    fn check_can_add(&self, section: &Section) -> Result<(), SectionError> {
        let (up, down) = section.stations();
        match (self.contains_station(up), self.contains_station(down)) {
            (true, true) => Err(SectionError::AlreadyRegistered {
                up: up.clone(),
                down: down.clone(),
            }),
            (false, false) => Err(SectionError::Disconnected {
                up: up.clone(),
                down: down.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Remove a station from the line.
    ///
    /// Removing a terminus drops its single section. Removing an interior
    /// station replaces its two sections with one spanning both, so the
    /// line's total distance is preserved. If that sum would overflow a
    /// [`Distance`](super::Distance) the removal fails instead.
    pub fn remove_station(&mut self, station: &Station) -> Result<(), SectionError> {
        if self.sections.len() <= 1 {
            return Err(SectionError::LastSection);
        }

        let upstream = self.position(|s| s.has_down_station(station));
        let downstream = self.position(|s| s.has_up_station(station));

        match (upstream, downstream) {
            (Some(up_idx), Some(down_idx)) => {
                let mut merged = self.sections[up_idx].clone();
                merged.connect_with(&self.sections[down_idx])?;
                self.sections[up_idx] = merged;
                self.sections.remove(down_idx);
            }
            (Some(idx), None) | (None, Some(idx)) => {
                self.sections.remove(idx);
            }
            (None, None) => return Err(SectionError::StationNotOnLine(station.clone())),
        }

        trace!(station = %station, remaining = self.sections.len(), "station removed");
        Ok(())
    }

    /// Weighted multigraph over this line's stations, one edge per section.
    pub fn make_graph(&self) -> PathGraph {
        PathGraphBuilder::new().add_sections(self).build()
    }

    fn position(&self, predicate: impl Fn(&Section) -> bool) -> Option<usize> {
        self.sections.iter().position(predicate)
    }
}

impl From<Vec<Section>> for Sections {
    /// Wrap a caller-supplied set of sections without validating it.
    fn from(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Distance, LineId, StationId};
    use proptest::prelude::*;

    /// One growth step of a randomly built line.
    #[derive(Debug, Clone)]
    enum Edit {
        Append(u32),
        Prepend(u32),
        /// Insert inside the section at the given index (mod len), sharing
        /// its up station when the flag is set and its down station otherwise.
        Inside(usize, u32, bool),
    }

    fn edit() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (1u32..50).prop_map(Edit::Append),
            (1u32..50).prop_map(Edit::Prepend),
            (any::<usize>(), any::<u32>(), any::<bool>())
                .prop_map(|(i, d, from_up)| Edit::Inside(i, d, from_up)),
        ]
    }

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("station-{id}"))
    }

    fn section(up: Station, down: Station, distance: u32) -> Section {
        Section::new(LineId(1), up, down, Distance::new(distance).unwrap()).unwrap()
    }

    /// Build a line by applying edits, checking that each valid insertion
    /// grows the station list by exactly one.
    fn build(first: u32, edits: &[Edit]) -> Result<Sections, TestCaseError> {
        let mut sections = Sections::empty();
        sections
            .add_station(section(station(0), station(1), first))
            .unwrap();
        let mut next_id = 2;

        for edit in edits {
            let stations = sections.stations();
            let new = station(next_id);
            let candidate = match edit {
                Edit::Append(d) => section(stations[stations.len() - 1].clone(), new, *d),
                Edit::Prepend(d) => section(new, stations[0].clone(), *d),
                Edit::Inside(i, d, from_up) => {
                    let target = sections.iter().nth(i % sections.len()).unwrap().clone();
                    let available = target.distance().get();
                    if available < 2 {
                        continue;
                    }
                    let d = 1 + d % (available - 1);
                    if *from_up {
                        section(target.up_station().clone(), new, d)
                    } else {
                        section(new, target.down_station().clone(), d)
                    }
                }
            };
            next_id += 1;

            let before_len = stations.len();
            let before_total = sections.total_distance();
            let added = u64::from(candidate.distance().get());
            let inside = matches!(edit, Edit::Inside(..));

            sections.add_station(candidate).unwrap();

            prop_assert_eq!(sections.stations().len(), before_len + 1);
            if inside {
                prop_assert_eq!(sections.total_distance(), before_total);
            } else {
                prop_assert_eq!(sections.total_distance(), before_total + added);
            }
        }
        Ok(sections)
    }

    proptest! {
        #[test]
        fn stations_are_distinct_and_one_more_than_sections(
            first in 1u32..100,
            edits in proptest::collection::vec(edit(), 0..20),
        ) {
            let sections = build(first, &edits)?;
            let stations = sections.stations();

            prop_assert_eq!(stations.len(), sections.len() + 1);
            let distinct: HashSet<_> = stations.iter().collect();
            prop_assert_eq!(distinct.len(), stations.len());
        }

        #[test]
        fn removing_interior_station_preserves_distance(
            first in 1u32..100,
            edits in proptest::collection::vec(edit(), 1..20),
            pick in any::<usize>(),
        ) {
            let mut sections = build(first, &edits)?;
            let stations = sections.stations();
            prop_assume!(stations.len() >= 3);

            let interior = &stations[1 + pick % (stations.len() - 2)];
            let total = sections.total_distance();

            sections.remove_station(interior).unwrap();

            prop_assert_eq!(sections.total_distance(), total);
            prop_assert_eq!(sections.stations().len(), stations.len() - 1);
            prop_assert!(!sections.contains_station(interior));
        }

        #[test]
        fn removing_terminal_station_drops_one_section(
            first in 1u32..100,
            edits in proptest::collection::vec(edit(), 1..20),
            from_start in any::<bool>(),
        ) {
            let mut sections = build(first, &edits)?;
            let stations = sections.stations();
            prop_assume!(stations.len() >= 3);

            let terminal = if from_start { &stations[0] } else { &stations[stations.len() - 1] };
            let count = sections.len();

            sections.remove_station(terminal).unwrap();

            prop_assert_eq!(sections.len(), count - 1);
            prop_assert_eq!(sections.stations().len(), stations.len() - 1);
        }
    }
}
