//! Restriction rule types.

use std::collections::{BTreeMap, BTreeSet};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::{BuildingId, DistrictId};

/// Rules for one direction (incoming or outgoing) of a building's transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionRestrictions {
    /// When false, partners from any district (or none) are accepted.
    pub districts_enabled: bool,
    /// Accept partners in this building's own district even if unlisted.
    pub allow_same_district: bool,
    pub allowed_districts: BTreeSet<DistrictId>,
    /// Partners refused regardless of district.
    pub excluded_buildings: BTreeSet<BuildingId>,
}

impl Default for DirectionRestrictions {
    fn default() -> Self {
        Self {
            districts_enabled: false,
            allow_same_district: true,
            allowed_districts: BTreeSet::new(),
            excluded_buildings: BTreeSet::new(),
        }
    }
}

impl DirectionRestrictions {
    /// Whether a building in `own_district` may trade with `partner`.
    pub fn permits(
        &self,
        own_district: Option<DistrictId>,
        partner: BuildingId,
        partner_district: Option<DistrictId>,
    ) -> bool {
        if self.excluded_buildings.contains(&partner) {
            return false;
        }
        if !self.districts_enabled {
            return true;
        }
        if self.allow_same_district && own_district.is_some() && own_district == partner_district
        {
            return true;
        }
        partner_district.is_some_and(|d| self.allowed_districts.contains(&d))
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Incoming and outgoing rules for one building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingRestrictions {
    pub incoming: DirectionRestrictions,
    pub outgoing: DirectionRestrictions,
}

impl BuildingRestrictions {
    pub fn is_default(&self) -> bool {
        self.incoming.is_default() && self.outgoing.is_default()
    }
}

/// City-wide restriction store. Only buildings with non-default rules have
/// an entry.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferRestrictions {
    pub(crate) buildings: BTreeMap<BuildingId, BuildingRestrictions>,
}

impl TransferRestrictions {
    pub fn get(&self, building: BuildingId) -> Option<&BuildingRestrictions> {
        self.buildings.get(&building)
    }

    /// Replace a building's rules. Default rules remove the entry.
    pub fn set(&mut self, building: BuildingId, rules: BuildingRestrictions) {
        if building.is_none() {
            return;
        }
        if rules.is_default() {
            self.buildings.remove(&building);
        } else {
            self.buildings.insert(building, rules);
        }
    }

    /// Edit a building's rules in place, starting from defaults if it has none.
    pub fn update(&mut self, building: BuildingId, edit: impl FnOnce(&mut BuildingRestrictions)) {
        let mut rules = self.buildings.get(&building).cloned().unwrap_or_default();
        edit(&mut rules);
        self.set(building, rules);
    }

    /// Whether `source` (in `source_district`) may send to `target`
    /// (in `target_district`).
    pub fn transfer_allowed(
        &self,
        source: BuildingId,
        source_district: Option<DistrictId>,
        target: BuildingId,
        target_district: Option<DistrictId>,
    ) -> bool {
        let outgoing_ok = self
            .get(source)
            .is_none_or(|r| r.outgoing.permits(source_district, target, target_district));
        let incoming_ok = self
            .get(target)
            .is_none_or(|r| r.incoming.permits(target_district, source, source_district));
        outgoing_ok && incoming_ok
    }

    /// Forget a removed building: its own rules, and every exclusion naming it.
    pub fn release_building(&mut self, building: BuildingId) {
        self.buildings.remove(&building);
        for rules in self.buildings.values_mut() {
            rules.incoming.excluded_buildings.remove(&building);
            rules.outgoing.excluded_buildings.remove(&building);
        }
        self.buildings.retain(|_, rules| !rules.is_default());
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}
