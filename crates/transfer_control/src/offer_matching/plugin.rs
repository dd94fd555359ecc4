//! Plugin registration for offer matching.

use bevy::prelude::*;

use crate::SimulationSet;

use super::systems::match_transfer_offers;
use super::types::{TransferMatchStats, TransferMatchedEvent, TransferOfferBook};

pub struct OfferMatchingPlugin;

impl Plugin for OfferMatchingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransferOfferBook>()
            .init_resource::<TransferMatchStats>()
            .add_event::<TransferMatchedEvent>()
            .add_systems(
                FixedUpdate,
                match_transfer_offers.in_set(SimulationSet::Simulation),
            );
    }
}
