//! Plugin registration for pathfinding-failure suppression.

use bevy::prelude::*;

use crate::buildings::BuildingReleasedEvent;
use crate::SimulationSet;

use super::systems::{record_pathfind_failures, release_failed_buildings, sweep_stale_failures};
use super::types::{PathfindFailedEvent, PathfindFailureMemo};

pub struct PathfindFailurePlugin;

impl Plugin for PathfindFailurePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PathfindFailureMemo>()
            .add_event::<PathfindFailedEvent>()
            .add_event::<BuildingReleasedEvent>()
            .add_systems(
                FixedUpdate,
                (record_pathfind_failures, release_failed_buildings)
                    .chain()
                    .after(crate::tick_slow_timer)
                    .in_set(SimulationSet::PreSim),
            )
            .add_systems(
                FixedUpdate,
                sweep_stale_failures.in_set(SimulationSet::PostSim),
            );
    }
}
