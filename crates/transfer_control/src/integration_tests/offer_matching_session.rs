use std::time::Duration;

use crate::buildings::BuildingId;
use crate::offer_matching::{TransferMatchStats, TransferOffer, TransferOfferBook, TransferReason};
use crate::restrictions::TransferRestrictions;
use crate::test_harness::TestSession;
use crate::transfer_settings::TransferSettings;

fn goods(id: u16, x: usize, amount: u32) -> TransferOffer {
    TransferOffer {
        building: BuildingId(id),
        district: None,
        reason: TransferReason::Goods,
        position: (x, 0),
        amount,
    }
}

#[test]
fn test_matches_emitted_and_book_drained() {
    let mut session = TestSession::new();
    session.post_outgoing(goods(1, 0, 10));
    session.post_incoming(goods(2, 5, 10));
    session.tick(1);

    assert_eq!(session.drain_matches(), vec![(1, 2, 10)]);
    assert!(session.resource::<TransferOfferBook>().is_empty());
    assert_eq!(session.resource::<TransferMatchStats>().matched, 1);
}

#[test]
fn test_failure_reported_this_tick_blocks_match() {
    let mut session = TestSession::new();
    session.report_failure(1, 2);
    session.post_outgoing(goods(1, 0, 10));
    session.post_incoming(goods(2, 5, 10));
    session.post_incoming(goods(3, 9, 10));
    session.tick(1);

    assert_eq!(session.drain_matches(), vec![(1, 3, 10)]);
    assert_eq!(session.resource::<TransferMatchStats>().blocked_by_failure, 1);
}

#[test]
fn test_blocked_pair_matches_again_after_window() {
    let mut session = TestSession::new();
    session.report_failure(1, 2);
    session.tick(1);

    session.advance_time(Duration::from_secs(4 * 60));
    session.post_outgoing(goods(1, 0, 1));
    session.post_incoming(goods(2, 1, 1));
    session.tick(1);
    assert!(session.drain_matches().is_empty());

    session.advance_time(Duration::from_secs(60));
    session.post_outgoing(goods(1, 0, 1));
    session.post_incoming(goods(2, 1, 1));
    session.tick(1);
    assert_eq!(session.drain_matches(), vec![(1, 2, 1)]);
    assert!(
        session.memo().is_empty(),
        "the expired record is removed by the matcher's lookup"
    );
}

#[test]
fn test_released_building_no_longer_blocked() {
    let mut session = TestSession::new();
    session.report_failure(1, 2);
    session.tick(1);

    session.release_building(2);
    session.post_outgoing(goods(1, 0, 1));
    session.post_incoming(goods(2, 1, 1));
    session.tick(1);

    assert_eq!(session.drain_matches(), vec![(1, 2, 1)]);
}

#[test]
fn test_tracking_disabled_never_blocks() {
    let mut session = TestSession::new();
    session
        .resource_mut::<TransferSettings>()
        .track_pathfind_failures = false;
    session.report_failure(1, 2);
    session.post_outgoing(goods(1, 0, 1));
    session.post_incoming(goods(2, 1, 1));
    session.tick(1);

    assert_eq!(session.drain_matches(), vec![(1, 2, 1)]);
}

#[test]
fn test_restrictions_and_distance_setting_apply() {
    let mut session = TestSession::new();
    session
        .resource_mut::<TransferRestrictions>()
        .update(BuildingId(2), |r| {
            r.incoming.excluded_buildings.insert(BuildingId(1));
        });
    session
        .resource_mut::<TransferSettings>()
        .set_max_match_distance(20);

    session.post_outgoing(goods(1, 0, 1));
    session.post_incoming(goods(2, 1, 1));
    session.post_incoming(goods(3, 15, 1));
    session.post_incoming(goods(4, 25, 1));
    session.tick(1);

    assert_eq!(session.drain_matches(), vec![(1, 3, 1)]);
    let stats = session.resource::<TransferMatchStats>();
    assert_eq!(stats.blocked_by_restriction, 1);
}
