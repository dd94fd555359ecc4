//! Ordering of transfer-control systems via `SystemSet` phases.
//!
//! All systems run in `FixedUpdate`, chained as:
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counters, settings sync, and ingestion of host events
//!   (pathfinding failures, released buildings). After this phase the failure
//!   memo and restrictions reflect everything the host reported this tick.
//! * **Simulation** – Offer matching. Reads restrictions and queries (and
//!   lazily expires) the failure memo.
//! * **PostSim** – Housekeeping that must not affect this tick's matches,
//!   such as the periodic stale-failure sweep.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain by `TransferControlPlugin`. Plugins use
/// `.in_set(SimulationSet::X)` and add `.after()` / `.before()` constraints
/// only within a phase.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Event ingestion: failure reports, building releases, settings sync.
    PreSim,
    /// Offer matching.
    Simulation,
    /// Sweeps and other after-the-fact cleanup.
    PostSim,
}
