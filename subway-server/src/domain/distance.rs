//! Section distance.

use std::fmt;

/// Error returned when constructing a non-positive distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance {value}: must be a positive integer")]
pub struct InvalidDistance {
    value: u32,
}

/// A strictly positive distance between two adjacent stations.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let five = Distance::new(5).unwrap();
/// let two = Distance::new(2).unwrap();
/// assert_eq!(five.checked_sub(two), Distance::new(3).ok());
/// assert_eq!(two.checked_sub(two), None);
/// assert_eq!(five.checked_add(two), Distance::new(7).ok());
///
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Create a distance, rejecting zero.
    pub fn new(value: u32) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance { value });
        }
        Ok(Distance(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Subtract `other`, returning `None` unless the result stays positive.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.0
            .checked_sub(other.0)
            .filter(|d| *d > 0)
            .map(Distance)
    }

    /// Add `other`, returning `None` if the sum does not fit.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.0).map(Distance)
    }
}


impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Distance {
    type Error = InvalidDistance;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Distance::new(value)
    }
}
