use crate::offer_matching::{TransferMatchStats, TransferOfferBook};
use crate::pathfind_failure::PathfindFailureMemo;
use crate::restrictions::TransferRestrictions;
use crate::test_harness::TestSession;
use crate::transfer_settings::TransferSettings;
use crate::{Saveable, SaveableRegistry, TickCounter};

#[test]
fn test_plugin_registers_resources() {
    let session = TestSession::new();
    session.assert_resource_exists::<PathfindFailureMemo>();
    session.assert_resource_exists::<TransferRestrictions>();
    session.assert_resource_exists::<TransferSettings>();
    session.assert_resource_exists::<TransferOfferBook>();
    session.assert_resource_exists::<TransferMatchStats>();
}

#[test]
fn test_new_session_starts_empty() {
    let session = TestSession::new();
    assert!(session.memo().is_empty());
    assert!(session.memo().tracking_enabled());
    assert!(session.resource::<TransferRestrictions>().is_empty());
}

#[test]
fn test_phases_run_every_tick() {
    let mut session = TestSession::new();
    let before = session.resource::<TickCounter>().0;
    session.tick(5);
    assert_eq!(session.resource::<TickCounter>().0, before + 5);
}

#[test]
fn test_saveable_registry_holds_user_config_only() {
    let session = TestSession::new();
    let keys: Vec<&str> = session
        .resource::<SaveableRegistry>()
        .entries
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert!(keys.contains(&TransferRestrictions::SAVE_KEY));
    assert!(keys.contains(&TransferSettings::SAVE_KEY));
    assert_eq!(keys.len(), 2, "the failure memo must not be persisted");
}
