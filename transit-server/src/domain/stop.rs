//! Stop identity and entity types.

use crate::geo::Coordinates;

/// Dense index of a stop in the catalogue's arena.
///
/// Assigned at first insertion and stable for the catalogue's lifetime.
/// Re-adding a stop under the same name updates its coordinates but keeps
/// the id, so ids recorded elsewhere (distances, routes, the graph) stay
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

/// A named stop with geographic coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}
