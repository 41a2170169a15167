//! Bus route entity and the round-trip expansion rule.

use super::StopId;

/// Dense index of a bus in the catalogue's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

/// A named bus route.
///
/// `stops` always holds the *expanded* sequence describing the full round
/// trip: a round-trip route is stored as given (its forward sequence
/// already ends at its origin), while an out-and-back route is the forward
/// leg followed by the reverse of the forward leg excluding the last stop.
///
/// # Invariants
///
/// - `stops` is never empty
/// - `final_stop` is the last stop of the forward leg
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
    /// Last stop of the forward leg, kept for end-of-line label placement
    /// in the rendering view. Not consulted by the route graph.
    pub final_stop: StopId,
}

impl Bus {
    /// Number of stops on the forward leg.
    pub fn forward_len(&self) -> usize {
        if self.is_roundtrip {
            self.stops.len()
        } else {
            self.stops.len() / 2 + 1
        }
    }

    /// The forward traversal leg.
    ///
    /// For a round-trip route this is the whole expanded sequence.
    pub fn forward_leg(&self) -> &[StopId] {
        &self.stops[..self.forward_len()]
    }

    /// The return traversal leg, starting at the turnaround stop.
    ///
    /// `None` for round-trip routes, which have no return leg.
    pub fn return_leg(&self) -> Option<&[StopId]> {
        if self.is_roundtrip {
            None
        } else {
            Some(&self.stops[self.forward_len() - 1..])
        }
    }
}

/// Expand a forward stop sequence into the stored round-trip sequence.
///
/// Round-trip routes pass through unchanged. Out-and-back routes append
/// the reverse of the forward leg, excluding the turnaround stop itself:
/// `[S0..Sn]` becomes `[S0..Sn, S(n-1)..S0]`.
pub fn expand_route(forward: &[StopId], is_roundtrip: bool) -> Vec<StopId> {
    let mut expanded = forward.to_vec();
    if !is_roundtrip {
        expanded.extend(forward.iter().rev().skip(1));
    }
    expanded
}
