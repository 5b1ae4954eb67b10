//! Candidate stops.
//!
//! The routing core only ever reads a candidate's position. Anything else a
//! caller attaches (names, addresses, precomputed distances) is carried along
//! untouched.

use std::collections::HashMap;

use crate::Coordinate;

/// Free-form display metadata such as `name` or `city`.
pub type Tags = HashMap<String, String>;

/// A value with a fixed geographic position.
///
/// Implement this for any caller-owned type to route it directly; the
/// sequencer returns clones of the original values in visiting order.
pub trait Located {
    /// Position used for distance calculations.
    fn location(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn location(&self) -> Coordinate {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Coordinate {
        (**self).location()
    }
}

/// A location worth visiting.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use taproute_core::{Coordinate, PointOfInterest};
///
/// # fn main() -> Result<(), taproute_core::CoordinateError> {
/// let poi = PointOfInterest::new(
///     "yards",
///     Coordinate::new(39.96, -75.14)?,
///     HashMap::from([("name".into(), "Yards Brewing".into())]),
/// );
///
/// assert_eq!(poi.id, "yards");
/// assert_eq!(poi.tags.get("name"), Some(&"Yards Brewing".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Opaque caller-supplied identifier.
    pub id: String,
    /// Geospatial position.
    pub location: Coordinate,
    /// Display metadata; never interpreted by the core.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Tags,
}

impl PointOfInterest {
    /// Construct a `PointOfInterest` with the provided tags.
    pub fn new(id: impl Into<String>, location: Coordinate, tags: Tags) -> Self {
        Self {
            id: id.into(),
            location,
            tags,
        }
    }

    /// Construct a `PointOfInterest` without tags.
    ///
    /// # Examples
    /// ```
    /// use taproute_core::{Coordinate, PointOfInterest};
    ///
    /// let origin = Coordinate::new(0.0, 0.0).expect("valid coordinate");
    /// let poi = PointOfInterest::with_empty_tags("a", origin);
    /// assert!(poi.tags.is_empty());
    /// ```
    pub fn with_empty_tags(id: impl Into<String>, location: Coordinate) -> Self {
        Self::new(id, location, Tags::new())
    }
}

impl Located for PointOfInterest {
    fn location(&self) -> Coordinate {
        self.location
    }
}
