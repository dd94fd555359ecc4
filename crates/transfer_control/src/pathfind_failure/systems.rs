//! System functions feeding host events into the failure memo.

use bevy::prelude::*;

use crate::buildings::BuildingReleasedEvent;
use crate::SlowTickTimer;

use super::types::{PathfindFailedEvent, PathfindFailureMemo};

/// Record every pathfinding failure reported since the last run.
pub fn record_pathfind_failures(
    time: Res<Time<Real>>,
    mut failures: EventReader<PathfindFailedEvent>,
    mut memo: ResMut<PathfindFailureMemo>,
) {
    let now = time.elapsed();
    for failure in failures.read() {
        memo.record_failure(failure.source, failure.target, now);
    }
}

/// Purge records for buildings the host removed.
pub fn release_failed_buildings(
    time: Res<Time<Real>>,
    mut released: EventReader<BuildingReleasedEvent>,
    mut memo: ResMut<PathfindFailureMemo>,
) {
    let now = time.elapsed();
    for event in released.read() {
        memo.release_building(event.building, now);
    }
}

/// Periodically drop stale records that no lookup has touched.
pub fn sweep_stale_failures(
    timer: Res<SlowTickTimer>,
    time: Res<Time<Real>>,
    mut memo: ResMut<PathfindFailureMemo>,
) {
    if !timer.should_run() || memo.is_empty() {
        return;
    }
    let removed = memo.sweep_expired(time.elapsed());
    if removed > 0 {
        debug!("swept {} stale pathfinding failure records", removed);
    }
}
