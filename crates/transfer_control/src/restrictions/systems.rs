use bevy::prelude::*;

use crate::buildings::BuildingReleasedEvent;

use super::types::TransferRestrictions;

/// Drop rules for buildings the host removed.
pub fn release_building_restrictions(
    mut released: EventReader<BuildingReleasedEvent>,
    mut restrictions: ResMut<TransferRestrictions>,
) {
    for event in released.read() {
        if restrictions.is_empty() {
            continue;
        }
        restrictions.release_building(event.building);
    }
}
