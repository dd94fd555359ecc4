//! Per-building transfer restrictions.
//!
//! Each building may limit who it trades with, separately for incoming and
//! outgoing transfers:
//! - a district allow-list (with an optional "own district is always fine")
//! - an explicit list of excluded partner buildings
//!
//! A transfer from `source` to `target` is allowed only if the source's
//! outgoing rules accept the target and the target's incoming rules accept
//! the source. Buildings without stored rules accept everyone.
//!
//! Rules are user-authored and travel with the save file.

mod persistence;
mod plugin;
mod systems;
mod types;


pub use plugin::RestrictionsPlugin;
pub use systems::release_building_restrictions;
pub use types::{BuildingRestrictions, DirectionRestrictions, TransferRestrictions};
