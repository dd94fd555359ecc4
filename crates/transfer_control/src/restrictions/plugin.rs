use bevy::prelude::*;

use crate::buildings::BuildingReleasedEvent;
use crate::SimulationSet;

use super::systems::release_building_restrictions;
use super::types::TransferRestrictions;

pub struct RestrictionsPlugin;

impl Plugin for RestrictionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransferRestrictions>()
            .add_event::<BuildingReleasedEvent>()
            .add_systems(
                FixedUpdate,
                release_building_restrictions.in_set(SimulationSet::PreSim),
            );

        // Register for save/load via the SaveableRegistry.
        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<TransferRestrictions>();
    }
}
