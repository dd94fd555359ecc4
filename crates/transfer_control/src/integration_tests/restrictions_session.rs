use std::collections::BTreeMap;

use crate::buildings::BuildingId;
use crate::restrictions::TransferRestrictions;
use crate::test_harness::TestSession;
use crate::transfer_settings::TransferSettings;
use crate::SaveableRegistry;

#[test]
fn test_release_event_drops_building_rules() {
    let mut session = TestSession::new();
    {
        let mut restrictions = session.resource_mut::<TransferRestrictions>();
        restrictions.update(BuildingId(5), |r| r.outgoing.districts_enabled = true);
        restrictions.update(BuildingId(6), |r| {
            r.incoming.excluded_buildings.insert(BuildingId(5));
            r.outgoing.districts_enabled = true;
        });
    }

    session.release_building(5);
    session.tick(1);

    let restrictions = session.resource::<TransferRestrictions>();
    assert!(restrictions.get(BuildingId(5)).is_none());
    let rules = restrictions.get(BuildingId(6)).expect("building 6 keeps its rules");
    assert!(rules.incoming.excluded_buildings.is_empty());
}

#[test]
fn test_registry_roundtrip_through_world() {
    let mut session = TestSession::new();
    session
        .resource_mut::<TransferRestrictions>()
        .update(BuildingId(42), |r| {
            r.incoming.districts_enabled = true;
            r.incoming.allowed_districts.insert(3);
        });
    session
        .resource_mut::<TransferSettings>()
        .set_max_match_distance(48);

    let world = session.world_mut();
    let extensions = world
        .resource_scope(|world, registry: bevy::prelude::Mut<SaveableRegistry>| {
            registry.save_all(world)
        });
    assert_eq!(extensions.len(), 2);

    world.resource_scope(|world, registry: bevy::prelude::Mut<SaveableRegistry>| {
        registry.reset_all(world);
    });
    assert!(world.resource::<TransferRestrictions>().is_empty());

    world.resource_scope(|world, registry: bevy::prelude::Mut<SaveableRegistry>| {
        registry.load_all(world, &extensions);
    });
    let restrictions = world.resource::<TransferRestrictions>();
    let rules = restrictions.get(BuildingId(42)).expect("rules restored");
    assert!(rules.incoming.allowed_districts.contains(&3));
    assert_eq!(world.resource::<TransferSettings>().max_match_distance, 48);
}

#[test]
fn test_load_with_missing_keys_keeps_current_state() {
    let mut session = TestSession::new();
    session
        .resource_mut::<TransferRestrictions>()
        .update(BuildingId(7), |r| r.outgoing.districts_enabled = true);

    let world = session.world_mut();
    world.resource_scope(|world, registry: bevy::prelude::Mut<SaveableRegistry>| {
        registry.load_all(world, &BTreeMap::new());
    });
    assert_eq!(world.resource::<TransferRestrictions>().len(), 1);
}
