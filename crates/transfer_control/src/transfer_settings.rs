//! User-facing transfer settings.
//!
//! Owns the settings resource exposed to the host's options panel, persists
//! it via `Saveable`, and pushes the failure-tracking toggle into the
//! `PathfindFailureMemo` whenever it changes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_MATCH_DISTANCE;
use crate::pathfind_failure::{record_pathfind_failures, PathfindFailureMemo};
use crate::{Saveable, SimulationSet};

// =============================================================================
// TransferSettings resource
// =============================================================================

#[derive(
    Resource, Debug, Clone, PartialEq, Serialize, Deserialize, bitcode::Encode, bitcode::Decode,
)]
pub struct TransferSettings {
    /// Remember pathfinding failures and block repeat transfers between the
    /// same buildings for a while.
    pub track_pathfind_failures: bool,
    /// Maximum Manhattan distance (grid cells) between matched offers.
    pub max_match_distance: i32,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            track_pathfind_failures: true,
            max_match_distance: DEFAULT_MAX_MATCH_DISTANCE,
        }
    }
}

impl TransferSettings {
    /// Set the match distance, never below zero.
    pub fn set_max_match_distance(&mut self, distance: i32) {
        self.max_match_distance = distance.max(0);
    }
}

// =============================================================================
// Saveable implementation
// =============================================================================

impl Saveable for TransferSettings {
    const SAVE_KEY: &'static str = "transfer_settings";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}

// =============================================================================
// Settings sync system
// =============================================================================

/// Mirror `track_pathfind_failures` into the failure memo.
pub fn apply_tracking_setting(
    settings: Res<TransferSettings>,
    mut memo: ResMut<PathfindFailureMemo>,
) {
    if memo.tracking_enabled() == settings.track_pathfind_failures {
        return;
    }
    info!(
        "pathfinding failure tracking {}",
        if settings.track_pathfind_failures {
            "enabled"
        } else {
            "disabled"
        }
    );
    memo.set_tracking_enabled(settings.track_pathfind_failures);
}

// =============================================================================
// Plugin
// =============================================================================

pub struct TransferSettingsPlugin;

impl Plugin for TransferSettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransferSettings>()
            .init_resource::<PathfindFailureMemo>()
            .add_systems(
                FixedUpdate,
                apply_tracking_setting
                    .run_if(resource_changed::<TransferSettings>)
                    .before(record_pathfind_failures)
                    .in_set(SimulationSet::PreSim),
            );

        // Register for save/load via the SaveableRegistry.
        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<TransferSettings>();
    }
}

// =============================================================================
// Unit tests
// =============================================================================
