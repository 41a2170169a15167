//! Domain types for the transit catalogue.
//!
//! Entities reference each other through dense integer ids assigned by
//! the catalogue at insertion time, never through pointers or borrowed
//! references. The route graph, the distance index, and the buses-per-stop
//! index all key off these ids, so the catalogue's arenas can grow without
//! invalidating anything.

mod bus;
mod error;
mod info;
mod stop;

pub use bus::{Bus, BusId, expand_route};
pub use error::IngestError;
pub use info::{BusInfo, StopInfo};
pub use stop::{Stop, StopId};
