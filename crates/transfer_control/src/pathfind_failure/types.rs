//! Types and resources for pathfinding-failure suppression.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;

use crate::buildings::BuildingId;
use crate::config::RECENT_FAILURE_WINDOW;

/// Ordered `(source, target)` endpoints of a vehicle route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildingPair {
    pub source: BuildingId,
    pub target: BuildingId,
}

impl BuildingPair {
    /// Builds a pair, or `None` if either end is `BuildingId::NONE`.
    pub fn new(source: BuildingId, target: BuildingId) -> Option<Self> {
        if source.is_none() || target.is_none() {
            return None;
        }
        Some(Self { source, target })
    }

    /// The same endpoints travelled the other way.
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// True if `building` is either endpoint.
    pub fn involves(&self, building: BuildingId) -> bool {
        self.source == building || self.target == building
    }
}

/// Sent by the host's pathfinding when a vehicle travelling from `source`
/// to `target` could not be routed.
#[derive(Event, Debug, Clone, Copy)]
pub struct PathfindFailedEvent {
    pub source: BuildingId,
    pub target: BuildingId,
}

/// Session-scoped memo of recent pathfinding failures.
///
/// Timestamps are `Duration`s since an arbitrary monotonic origin (the
/// systems use `Time<Real>::elapsed`). A record is live while
/// `now - timestamp < RECENT_FAILURE_WINDOW`; every read treats older records
/// as absent.
#[derive(Resource, Debug)]
pub struct PathfindFailureMemo {
    failures: HashMap<BuildingPair, Duration>,
    tracking_enabled: bool,
    /// Failures recorded (including refreshes) since the session started.
    pub failures_recorded: u64,
    /// Lookups that found a live failure and blocked a transfer.
    pub transfers_suppressed: u64,
}

impl Default for PathfindFailureMemo {
    fn default() -> Self {
        Self {
            failures: HashMap::new(),
            tracking_enabled: true,
            failures_recorded: 0,
            transfers_suppressed: 0,
        }
    }
}

fn is_stale(recorded_at: Duration, now: Duration) -> bool {
    now.saturating_sub(recorded_at) >= RECENT_FAILURE_WINDOW
}

impl PathfindFailureMemo {
    /// Record (or refresh) a failure for the ordered pair at `now`.
    ///
    /// No-op while tracking is disabled or if either id is the sentinel.
    pub fn record_failure(&mut self, source: BuildingId, target: BuildingId, now: Duration) {
        if !self.tracking_enabled {
            return;
        }
        let Some(pair) = BuildingPair::new(source, target) else {
            return;
        };
        debug!(
            "vehicle pathfinding failure between buildings {} and {}",
            source, target
        );
        self.failures.insert(pair, now);
        self.failures_recorded += 1;
    }

    /// True if a live failure exists for exactly this ordered pair.
    ///
    /// This lookup has a side effect: a stale record it finds is removed
    /// before `false` is returned. Use [`Self::peek`] for a non-mutating check.
    pub fn has_recent_failure(
        &mut self,
        source: BuildingId,
        target: BuildingId,
        now: Duration,
    ) -> bool {
        let Some(pair) = BuildingPair::new(source, target) else {
            return false;
        };
        let Some(&recorded_at) = self.failures.get(&pair) else {
            return false;
        };
        if is_stale(recorded_at, now) {
            self.failures.remove(&pair);
            return false;
        }
        debug!(
            "blocked transfer between buildings {} and {} due to pathfinding failure",
            source, target
        );
        self.transfers_suppressed += 1;
        true
    }

    /// Same answer as [`Self::has_recent_failure`] without expiring anything
    /// or touching the counters.
    pub fn peek(&self, source: BuildingId, target: BuildingId, now: Duration) -> bool {
        BuildingPair::new(source, target)
            .and_then(|pair| self.failures.get(&pair))
            .is_some_and(|&recorded_at| !is_stale(recorded_at, now))
    }

    /// Drop every record with `building` at either end, plus every record
    /// that is already stale.
    pub fn release_building(&mut self, building: BuildingId, now: Duration) {
        let before = self.failures.len();
        self.failures
            .retain(|pair, &mut recorded_at| !pair.involves(building) && !is_stale(recorded_at, now));
        let removed = before - self.failures.len();
        if removed > 0 {
            debug!(
                "released building {}: removed {} pathfinding failure records",
                building, removed
            );
        }
    }

    /// Drop every stale record. Returns how many were removed.
    pub fn sweep_expired(&mut self, now: Duration) -> usize {
        let before = self.failures.len();
        self.failures
            .retain(|_, &mut recorded_at| !is_stale(recorded_at, now));
        before - self.failures.len()
    }

    pub fn tracking_enabled(&self) -> bool {
        self.tracking_enabled
    }

    /// Turn failure recording on or off. Disabling clears every record.
    pub fn set_tracking_enabled(&mut self, enabled: bool) {
        self.tracking_enabled = enabled;
        if !enabled {
            self.failures.clear();
        }
    }

    /// Forget every record (new game). Tracking state is unchanged.
    pub fn clear(&mut self) {
        self.failures.clear();
    }

    /// Number of stored records, live or not yet swept.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}
