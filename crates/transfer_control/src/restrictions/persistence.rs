//! Save/load for transfer restrictions.

use bitcode::{Decode, Encode};

use crate::buildings::BuildingId;

use super::types::{BuildingRestrictions, DirectionRestrictions, TransferRestrictions};

#[derive(Debug, Clone, Default, Encode, Decode)]
struct DirectionSaveData {
    districts_enabled: bool,
    allow_same_district: bool,
    allowed_districts: Vec<u8>,
    excluded_buildings: Vec<u16>,
}

#[derive(Debug, Clone, Default, Encode, Decode)]
struct BuildingSaveData {
    building: u16,
    incoming: DirectionSaveData,
    outgoing: DirectionSaveData,
}

/// Serializable form of `TransferRestrictions`.
#[derive(Debug, Clone, Default, Encode, Decode)]
pub(crate) struct TransferRestrictionsSaveData {
    buildings: Vec<BuildingSaveData>,
}

impl From<&DirectionRestrictions> for DirectionSaveData {
    fn from(rules: &DirectionRestrictions) -> Self {
        Self {
            districts_enabled: rules.districts_enabled,
            allow_same_district: rules.allow_same_district,
            allowed_districts: rules.allowed_districts.iter().copied().collect(),
            excluded_buildings: rules.excluded_buildings.iter().map(|b| b.0).collect(),
        }
    }
}

impl From<DirectionSaveData> for DirectionRestrictions {
    fn from(data: DirectionSaveData) -> Self {
        Self {
            districts_enabled: data.districts_enabled,
            allow_same_district: data.allow_same_district,
            allowed_districts: data.allowed_districts.into_iter().collect(),
            excluded_buildings: data
                .excluded_buildings
                .into_iter()
                .map(BuildingId)
                .filter(|b| b.is_some())
                .collect(),
        }
    }
}

impl crate::Saveable for TransferRestrictions {
    const SAVE_KEY: &'static str = "transfer_restrictions";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.is_empty() {
            return None;
        }
        let data = TransferRestrictionsSaveData {
            buildings: self
                .buildings
                .iter()
                .map(|(building, rules)| BuildingSaveData {
                    building: building.0,
                    incoming: (&rules.incoming).into(),
                    outgoing: (&rules.outgoing).into(),
                })
                .collect(),
        };
        Some(bitcode::encode(&data))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let data: TransferRestrictionsSaveData = crate::decode_or_warn(Self::SAVE_KEY, bytes);
        let mut restrictions = Self::default();
        for entry in data.buildings {
            restrictions.set(
                BuildingId(entry.building),
                BuildingRestrictions {
                    incoming: entry.incoming.into(),
                    outgoing: entry.outgoing.into(),
                },
            );
        }
        restrictions
    }
}
