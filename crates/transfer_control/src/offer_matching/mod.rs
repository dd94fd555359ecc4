//! Transfer-offer matching.
//!
//! The host posts outgoing offers (a building has something to send) and
//! incoming offers (a building needs something) into the `TransferOfferBook`
//! each tick. The matcher pairs them:
//! - only offers with the same `TransferReason`
//! - nearest incoming offer first, within `TransferSettings::max_match_distance`
//! - candidates refused by `TransferRestrictions` are skipped
//! - candidates with a recent pathfinding failure from source to target are
//!   skipped, and the next nearest candidate is tried
//! - each outgoing offer is matched at most once per tick
//!
//! Committed matches are emitted as `TransferMatchedEvent`s and the book is
//! drained.

mod plugin;
mod systems;
mod types;


pub use plugin::OfferMatchingPlugin;
pub use systems::{match_offers, match_transfer_offers};
pub use types::{
    TransferMatchStats, TransferMatchedEvent, TransferOffer, TransferOfferBook, TransferReason,
};
