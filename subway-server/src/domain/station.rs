//! Station identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Opaque handle identifying a station across the whole network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station: an identity plus a display name.
///
/// Two stations are equal when their ids are equal; the name is carried for
/// display only. This lets sections and graphs hold cheap clones of a station
/// and still compare them by identity.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Station, StationId};
///
/// let a = Station::new(StationId(1), "강남역");
/// let b = Station::new(StationId(1), "Gangnam");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "강남역");
/// ```
#[derive(Clone)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station with the given id and name.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}, {})", self.id.0, self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_name() {
        let a = Station::new(StationId(7), "교대역");
        let b = Station::new(StationId(7), "renamed");
        let c = Station::new(StationId(8), "교대역");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new(StationId(1), "강남역"));
        assert!(set.contains(&Station::new(StationId(1), "other name")));
        assert!(!set.contains(&Station::new(StationId(2), "강남역")));
    }

    #[test]
    fn display_and_debug() {
        let station = Station::new(StationId(3), "양재역");
        assert_eq!(format!("{}", station), "양재역");
        assert_eq!(format!("{:?}", station), "Station(3, 양재역)");
        assert_eq!(station.id().to_string(), "3");
    }
}
