//! Offer matching.

use std::time::Duration;

use bevy::prelude::*;

use crate::pathfind_failure::PathfindFailureMemo;
use crate::restrictions::TransferRestrictions;
use crate::transfer_settings::TransferSettings;

use super::types::{TransferMatchStats, TransferMatchedEvent, TransferOffer, TransferOfferBook};

/// Match outgoing offers against incoming offers.
///
/// Incoming amounts are decremented in place as matches are made, so an
/// incoming offer can absorb several outgoing offers until it is full.
#[allow(clippy::too_many_arguments)]
pub fn match_offers(
    outgoing: &[TransferOffer],
    incoming: &mut [TransferOffer],
    restrictions: &TransferRestrictions,
    memo: &mut PathfindFailureMemo,
    max_distance: i32,
    now: Duration,
    stats: &mut TransferMatchStats,
) -> Vec<TransferMatchedEvent> {
    let mut matches = Vec::new();

    for offer in outgoing.iter().filter(|o| o.amount > 0) {
        let mut candidates: Vec<(usize, i32)> = incoming
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                c.reason == offer.reason && c.amount > 0 && c.building != offer.building
            })
            .map(|(i, c)| (i, offer.distance_to(c)))
            .filter(|&(_, dist)| dist <= max_distance)
            .collect();
        // Stable: equal distances keep posting order.
        candidates.sort_by_key(|&(_, dist)| dist);

        let mut chosen = None;
        for (i, _) in candidates {
            let target = &incoming[i];
            if !restrictions.transfer_allowed(
                offer.building,
                offer.district,
                target.building,
                target.district,
            ) {
                stats.blocked_by_restriction += 1;
                continue;
            }
            if memo.has_recent_failure(offer.building, target.building, now) {
                stats.blocked_by_failure += 1;
                continue;
            }
            chosen = Some(i);
            break;
        }

        let Some(i) = chosen else {
            stats.unmatched += 1;
            continue;
        };
        let target = &mut incoming[i];
        let amount = offer.amount.min(target.amount);
        target.amount -= amount;
        stats.matched += 1;
        matches.push(TransferMatchedEvent {
            reason: offer.reason,
            source: offer.building,
            target: target.building,
            amount,
        });
    }

    matches
}

/// Drain the offer book, emitting a `TransferMatchedEvent` per committed match.
#[allow(clippy::too_many_arguments)]
pub fn match_transfer_offers(
    time: Res<Time<Real>>,
    settings: Res<TransferSettings>,
    restrictions: Res<TransferRestrictions>,
    mut book: ResMut<TransferOfferBook>,
    mut memo: ResMut<PathfindFailureMemo>,
    mut stats: ResMut<TransferMatchStats>,
    mut matched: EventWriter<TransferMatchedEvent>,
) {
    if book.is_empty() {
        return;
    }

    let book = &mut *book;
    let results = match_offers(
        &book.outgoing,
        &mut book.incoming,
        &restrictions,
        &mut memo,
        settings.max_match_distance,
        time.elapsed(),
        &mut stats,
    );
    book.clear();

    for event in results {
        matched.send(event);
    }
}
