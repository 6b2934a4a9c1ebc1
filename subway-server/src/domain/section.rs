//! A single directed segment of a line.

use super::{Distance, LineId, SectionError, Station};

/// A directed, weighted edge `up -> down` belonging to one line.
///
/// The shape of a section only changes through [`Section::divide_by`] (when a
/// station is inserted inside it) and [`Section::connect_with`] (when a
/// station between two sections is removed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    line: LineId,
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Section {
    /// Create a section. The two stations must differ.
    pub fn new(
        line: LineId,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, SectionError> {
        if up_station == down_station {
            return Err(SectionError::SameStation(up_station));
        }
        Ok(Self {
            line,
            up_station,
            down_station,
            distance,
        })
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns the endpoints as `(up, down)`.
    pub fn stations(&self) -> (&Station, &Station) {
        (&self.up_station, &self.down_station)
    }

    pub fn has_up_station(&self, station: &Station) -> bool {
        &self.up_station == station
    }

    pub fn has_down_station(&self, station: &Station) -> bool {
        &self.down_station == station
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.has_up_station(station) || self.has_down_station(station)
    }

    /// True if `other` starts or ends where this section does, i.e. `other`
    /// describes an insertion point inside this section.
    pub fn is_overlapped(&self, other: &Section) -> bool {
        self.up_station == other.up_station || self.down_station == other.down_station
    }

    /// Shrink this section to make room for `other` inside it.
    ///
    /// `other` must share an endpoint with this section and be strictly
    /// shorter. The shared endpoint moves to the far end of `other`.
    pub fn divide_by(&mut self, other: &Section) -> Result<(), SectionError> {
        if !self.is_overlapped(other) {
            return Err(SectionError::NotOverlapped);
        }
        let remaining = self.distance.checked_sub(other.distance).ok_or(
            SectionError::DistanceNotShorter {
                existing: self.distance,
                requested: other.distance,
            },
        )?;

        if self.up_station == other.up_station {
            self.up_station = other.down_station.clone();
        }
        if self.down_station == other.down_station {
            self.down_station = other.up_station.clone();
        }
        self.distance = remaining;
        Ok(())
    }

    /// True if `other` immediately precedes this section in travel order.
    pub fn is_next_section(&self, other: &Section) -> bool {
        self.up_station == other.down_station
    }

    /// Merge an adjacent section into this one.
    ///
    /// The merged section spans both and its distance is the sum. Fails
    /// without changing `self` if the sum does not fit in a [`Distance`].
    pub fn connect_with(&mut self, other: &Section) -> Result<(), SectionError> {
        let follows = self.is_next_section(other);
        let precedes = other.is_next_section(self);
        if !follows && !precedes {
            return Err(SectionError::NotAdjacent);
        }
        let distance = self.distance.checked_add(other.distance).ok_or(
            SectionError::DistanceOverflow {
                first: self.distance,
                second: other.distance,
            },
        )?;

        if follows {
            self.up_station = other.up_station.clone();
        }
        if precedes {
            self.down_station = other.down_station.clone();
        }
        self.distance = distance;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), name)
    }

    fn section(up: &Station, down: &Station, distance: u32) -> Section {
        Section::new(
            LineId(1),
            up.clone(),
            down.clone(),
            Distance::new(distance).unwrap(),
        )
        .unwrap()
    }

    struct Fixture {
        gangnam: Station,
        yangjae: Station,
        nambu: Station,
    }

    fn fixture() -> Fixture {
        Fixture {
            gangnam: station(1, "강남역"),
            yangjae: station(2, "양재역"),
            nambu: station(3, "남부터미널역"),
        }
    }

    #[test]
    fn rejects_same_station() {
        let f = fixture();
        let err = Section::new(
            LineId(1),
            f.gangnam.clone(),
            f.gangnam.clone(),
            Distance::new(3).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, SectionError::SameStation(f.gangnam));
    }

    #[test]
    fn stations_are_up_then_down() {
        let f = fixture();
        let s = section(&f.gangnam, &f.yangjae, 5);
        assert_eq!(s.stations(), (&f.gangnam, &f.yangjae));
        assert!(s.contains(&f.gangnam));
        assert!(!s.contains(&f.nambu));
    }

    #[test]
    fn overlapped_on_shared_up_or_down() {
        let f = fixture();
        let base = section(&f.gangnam, &f.yangjae, 5);

        assert!(base.is_overlapped(&section(&f.gangnam, &f.nambu, 2)));
        assert!(base.is_overlapped(&section(&f.nambu, &f.yangjae, 2)));
        assert!(!base.is_overlapped(&section(&f.yangjae, &f.nambu, 2)));
    }

    #[test]
    fn divide_from_up_side() {
        let f = fixture();
        let mut base = section(&f.gangnam, &f.yangjae, 5);

        base.divide_by(&section(&f.gangnam, &f.nambu, 2)).unwrap();

        assert_eq!(base.stations(), (&f.nambu, &f.yangjae));
        assert_eq!(base.distance().get(), 3);
    }

    #[test]
    fn divide_from_down_side() {
        let f = fixture();
        let mut base = section(&f.gangnam, &f.yangjae, 5);

        base.divide_by(&section(&f.nambu, &f.yangjae, 4)).unwrap();

        assert_eq!(base.stations(), (&f.gangnam, &f.nambu));
        assert_eq!(base.distance().get(), 1);
    }

    #[test]
    fn divide_rejects_equal_or_longer() {
        let f = fixture();
        let mut base = section(&f.gangnam, &f.yangjae, 5);

        for distance in [5, 6, 100] {
            let err = base
                .divide_by(&section(&f.gangnam, &f.nambu, distance))
                .unwrap_err();
            assert!(matches!(err, SectionError::DistanceNotShorter { .. }));
        }
        assert_eq!(base, section(&f.gangnam, &f.yangjae, 5));
    }

    #[test]
    fn divide_rejects_non_overlapping() {
        let f = fixture();
        let mut base = section(&f.gangnam, &f.yangjae, 5);
        let err = base
            .divide_by(&section(&f.yangjae, &f.nambu, 1))
            .unwrap_err();
        assert_eq!(err, SectionError::NotOverlapped);
    }

    #[test]
    fn next_section() {
        let f = fixture();
        let first = section(&f.gangnam, &f.nambu, 2);
        let second = section(&f.nambu, &f.yangjae, 3);

        assert!(second.is_next_section(&first));
        assert!(!first.is_next_section(&second));
    }

    #[test]
    fn connect_with_predecessor() {
        let f = fixture();
        let first = section(&f.gangnam, &f.nambu, 2);
        let mut second = section(&f.nambu, &f.yangjae, 3);

        second.connect_with(&first).unwrap();

        assert_eq!(second.stations(), (&f.gangnam, &f.yangjae));
        assert_eq!(second.distance().get(), 5);
    }

    #[test]
    fn connect_with_successor() {
        let f = fixture();
        let mut first = section(&f.gangnam, &f.nambu, 2);
        let second = section(&f.nambu, &f.yangjae, 3);

        first.connect_with(&second).unwrap();

        assert_eq!(first.stations(), (&f.gangnam, &f.yangjae));
        assert_eq!(first.distance().get(), 5);
    }

    #[test]
    fn connect_rejects_non_adjacent() {
        let f = fixture();
        let mut a = section(&f.gangnam, &f.nambu, 2);
        let b = section(&f.gangnam, &f.yangjae, 3);

        assert_eq!(a.connect_with(&b).unwrap_err(), SectionError::NotAdjacent);
        assert_eq!(a, section(&f.gangnam, &f.nambu, 2));
    }

    #[test]
    fn connect_rejects_overflowing_distance() {
        let f = fixture();
        let mut first = section(&f.gangnam, &f.nambu, 3_000_000_000);
        let second = section(&f.nambu, &f.yangjae, 3_000_000_000);

        let err = first.connect_with(&second).unwrap_err();

        assert!(matches!(err, SectionError::DistanceOverflow { .. }));
        assert_eq!(first, section(&f.gangnam, &f.nambu, 3_000_000_000));
    }
}
