//! Pathfinding-failure suppression.
//!
//! When a vehicle fails to find a route from its source building to its
//! target building, the host reports the pair and the memo remembers it for
//! `RECENT_FAILURE_WINDOW`. The offer matcher asks the memo before committing
//! a transfer and skips pairs that failed recently, instead of dispatching
//! another vehicle that would fail the same way.
//!
//! Key behaviors:
//! - Pairs are ordered: a failure from A to B does not suppress B to A
//! - A repeat failure refreshes the pair's timestamp
//! - Stale records are dropped lazily on lookup, on building release, and by
//!   a slow-tick sweep
//! - Disabling tracking clears the memo and stops recording
//! - Building id 0 never takes part in a record

mod plugin;
mod systems;
mod types;


pub use plugin::PathfindFailurePlugin;
pub use systems::{record_pathfind_failures, release_failed_buildings, sweep_stale_failures};
pub use types::{BuildingPair, PathfindFailedEvent, PathfindFailureMemo};
