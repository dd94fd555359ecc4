//! Types and resources for transfer-offer matching.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::{BuildingId, DistrictId};

/// What a transfer moves. Deciding which buildings post which reasons is the
/// host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferReason {
    Goods,
    Food,
    Oil,
    Ore,
    Garbage,
    Mail,
    Sick,
    Dead,
    Crime,
    Fire,
}

/// One side of a potential transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOffer {
    pub building: BuildingId,
    pub district: Option<DistrictId>,
    pub reason: TransferReason,
    /// Grid position used for distance ranking.
    pub position: (usize, usize),
    pub amount: u32,
}

impl TransferOffer {
    /// Manhattan distance to another offer, in grid cells.
    pub fn distance_to(&self, other: &TransferOffer) -> i32 {
        (self.position.0 as i32 - other.position.0 as i32).abs()
            + (self.position.1 as i32 - other.position.1 as i32).abs()
    }
}

/// Pending offers for the current tick. Drained by the matcher.
#[derive(Resource, Debug, Default)]
pub struct TransferOfferBook {
    pub outgoing: Vec<TransferOffer>,
    pub incoming: Vec<TransferOffer>,
}

impl TransferOfferBook {
    pub fn add_outgoing(&mut self, offer: TransferOffer) {
        self.outgoing.push(offer);
    }

    pub fn add_incoming(&mut self, offer: TransferOffer) {
        self.incoming.push(offer);
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }

    pub fn clear(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }
}

/// A committed transfer: `source` sends `amount` to `target`.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TransferMatchedEvent {
    pub reason: TransferReason,
    pub source: BuildingId,
    pub target: BuildingId,
    pub amount: u32,
}

/// Running totals since the session started.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct TransferMatchStats {
    pub matched: u64,
    /// Candidates skipped because of a recent pathfinding failure.
    pub blocked_by_failure: u64,
    /// Candidates skipped by district or building restrictions.
    pub blocked_by_restriction: u64,
    /// Outgoing offers left without a partner.
    pub unmatched: u64,
}
