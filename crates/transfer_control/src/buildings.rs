//! Building identity as seen by the transfer rules.
//!
//! The host simulation owns buildings; this crate only ever sees their
//! 16-bit ids and district membership.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// District identifier. `None` at use sites means "outside any district".
pub type DistrictId = u8;

/// Host building identifier. `BuildingId::NONE` (0) is the "no building"
/// sentinel and never names a real building.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BuildingId(pub u16);

impl BuildingId {
    pub const NONE: BuildingId = BuildingId(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn is_some(self) -> bool {
        self.0 != 0
    }
}

impl From<u16> for BuildingId {
    fn from(id: u16) -> Self {
        BuildingId(id)
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sent by the host's building manager when a building is removed from the
/// simulation. Every transfer-control store drops state that names it.
#[derive(Event, Debug, Clone, Copy)]
pub struct BuildingReleasedEvent {
    pub building: BuildingId,
}
