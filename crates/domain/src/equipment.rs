use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

use thiserror::Error;

use crate::{EquipmentKind, MuscleGroup, catalog};

/// An equipment identifier as submitted by the wizard UI.
///
/// Catalog ids refer to entries of the static catalog. Custom equipment is
/// entered as free text and travels as `custom-<category>[-<kind>]-<name>`;
/// it is decoded here, once, and never re-parsed downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentID {
    Catalog(String),
    Custom {
        muscle_group: MuscleGroup,
        kind: Option<EquipmentKind>,
        name: String,
    },
}

const CUSTOM_PREFIX: &str = "custom-";

// Longest keys first, so "arms-bicep" is not consumed as "arms".
const CATEGORY_KEYS: [&str; 8] = [
    "arms-tricep",
    "arms-bicep",
    "shoulder",
    "chest",
    "back",
    "legs",
    "arms",
    "core",
];

impl EquipmentID {
    pub fn parse(id: &str) -> Result<Self, EquipmentIDError> {
        let Some(payload) = id.strip_prefix(CUSTOM_PREFIX) else {
            return Ok(EquipmentID::Catalog(id.to_string()));
        };

        for key in CATEGORY_KEYS {
            let Some(rest) = payload
                .strip_prefix(key)
                .and_then(|rest| rest.strip_prefix('-'))
            else {
                continue;
            };
            let muscle_group =
                MuscleGroup::try_from(key).map_err(|_| EquipmentIDError::unknown_category(id))?;
            // The kind segment is optional and only recognized when it
            // matches a known equipment kind.
            if let Some((first, name)) = rest.split_once('-') {
                if let Ok(kind) = EquipmentKind::try_from(first) {
                    if name.is_empty() {
                        return Err(EquipmentIDError::EmptyName(id.to_string()));
                    }
                    return Ok(EquipmentID::Custom {
                        muscle_group,
                        kind: Some(kind),
                        name: name.to_string(),
                    });
                }
            }
            if rest.is_empty() {
                return Err(EquipmentIDError::EmptyName(id.to_string()));
            }
            return Ok(EquipmentID::Custom {
                muscle_group,
                kind: None,
                name: rest.to_string(),
            });
        }

        Err(EquipmentIDError::unknown_category(id))
    }

    /// The human-readable equipment name, or `None` for an id the catalog
    /// does not know.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match self {
            EquipmentID::Catalog(id) => catalog::equipment(id).map(|e| e.name.to_string()),
            EquipmentID::Custom { name, .. } => Some(name.clone()),
        }
    }

    #[must_use]
    pub fn muscle_group(&self) -> Option<MuscleGroup> {
        match self {
            EquipmentID::Catalog(id) => catalog::equipment(id).map(|e| e.muscle_group),
            EquipmentID::Custom { muscle_group, .. } => Some(*muscle_group),
        }
    }
}

impl Display for EquipmentID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EquipmentID::Catalog(id) => write!(f, "{id}"),
            EquipmentID::Custom {
                muscle_group,
                kind: Some(kind),
                name,
            } => write!(f, "{CUSTOM_PREFIX}{muscle_group}-{kind}-{name}"),
            EquipmentID::Custom {
                muscle_group,
                kind: None,
                name,
            } => write!(f, "{CUSTOM_PREFIX}{muscle_group}-{name}"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EquipmentIDError {
    #[error("equipment id \"{0}\" has an unknown custom category")]
    UnknownCategory(String),
    #[error("equipment id \"{0}\" has an empty name")]
    EmptyName(String),
}

impl EquipmentIDError {
    fn unknown_category(id: &str) -> Self {
        EquipmentIDError::UnknownCategory(id.to_string())
    }
}

/// The user's equipment selection, de-duplicated with order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentSelection(Vec<EquipmentID>);

impl EquipmentSelection {
    #[must_use]
    pub fn new(ids: Vec<EquipmentID>) -> Self {
        let mut seen = BTreeSet::new();
        Self(
            ids.into_iter()
                .filter(|id| seen.insert(id.to_string()))
                .collect(),
        )
    }

    pub fn parse(ids: &[&str]) -> Result<Self, EquipmentIDError> {
        Ok(Self::new(
            ids.iter()
                .map(|id| EquipmentID::parse(id))
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EquipmentID> {
        self.0.iter()
    }

    /// Ids of selected catalog equipment, for matching against the static
    /// exercise tables. Custom equipment has no catalog-backed exercises.
    #[must_use]
    pub fn catalog_ids(&self) -> BTreeSet<&str> {
        self.0
            .iter()
            .filter_map(|id| match id {
                EquipmentID::Catalog(id) => Some(id.as_str()),
                EquipmentID::Custom { .. } => None,
            })
            .collect()
    }

    /// Muscle groups covered by at least one selected equipment item.
    #[must_use]
    pub fn available_groups(&self) -> BTreeSet<MuscleGroup> {
        self.0
            .iter()
            .filter_map(EquipmentID::muscle_group)
            .collect()
    }

    /// Number of selected items the catalog (or the custom payload) can name.
    #[must_use]
    pub fn named_count(&self) -> usize {
        self.0
            .iter()
            .filter(|id| id.display_name().is_some())
            .count()
    }

    /// Seed contribution of the selection: the weighted sum of the first
    /// byte of every encoded id. Independent of selection order.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.0
            .iter()
            .map(|id| id.to_string().bytes().next().map_or(0, u64::from) * 31)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        "bench-press",
        Ok(EquipmentID::Catalog("bench-press".to_string()))
    )]
    #[case(
        "custom-chest-Resistance Bands",
        Ok(EquipmentID::Custom {
            muscle_group: MuscleGroup::Chest,
            kind: None,
            name: "Resistance Bands".to_string(),
        })
    )]
    #[case(
        "custom-legs-machine-Pendulum Squat",
        Ok(EquipmentID::Custom {
            muscle_group: MuscleGroup::Legs,
            kind: Some(EquipmentKind::Machine),
            name: "Pendulum Squat".to_string(),
        })
    )]
    // A name that merely starts like a kind keeps its full text.
    #[case(
        "custom-back-machinery-hoist",
        Ok(EquipmentID::Custom {
            muscle_group: MuscleGroup::Back,
            kind: None,
            name: "machinery-hoist".to_string(),
        })
    )]
    #[case(
        "custom-arms-bicep-barbell-Thick Bar",
        Ok(EquipmentID::Custom {
            muscle_group: MuscleGroup::Arms,
            kind: Some(EquipmentKind::Barbell),
            name: "Thick Bar".to_string(),
        })
    )]
    #[case(
        "custom-torso-Twister",
        Err(EquipmentIDError::UnknownCategory("custom-torso-Twister".to_string()))
    )]
    #[case(
        "custom-chest-",
        Err(EquipmentIDError::EmptyName("custom-chest-".to_string()))
    )]
    #[case(
        "custom-chest-dumbbell-",
        Err(EquipmentIDError::EmptyName("custom-chest-dumbbell-".to_string()))
    )]
    fn test_equipment_id_parse(
        #[case] id: &str,
        #[case] expected: Result<EquipmentID, EquipmentIDError>,
    ) {
        assert_eq!(EquipmentID::parse(id), expected);
    }

    #[test]
    fn test_display_round_trip() {
        for id in [
            "bench-press",
            "custom-chest-Resistance Bands",
            "custom-legs-machine-Pendulum Squat",
        ] {
            assert_eq!(EquipmentID::parse(id).unwrap().to_string(), id);
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            EquipmentID::parse("bench-press").unwrap().display_name(),
            Some("Bench Press".to_string())
        );
        assert_eq!(
            EquipmentID::parse("custom-core-TRX Straps")
                .unwrap()
                .display_name(),
            Some("TRX Straps".to_string())
        );
        assert_eq!(
            EquipmentID::parse("no-such-equipment").unwrap().display_name(),
            None
        );
    }

    #[test]
    fn test_selection_deduplicates_preserving_order() {
        let selection =
            EquipmentSelection::parse(&["bench-press", "squat-rack", "bench-press"]).unwrap();
        assert_eq!(
            selection.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["bench-press".to_string(), "squat-rack".to_string()]
        );
    }

    #[test]
    fn test_available_groups() {
        let selection = EquipmentSelection::parse(&[
            "bench-press",
            "lat-pulldown",
            "custom-legs-Pendulum Squat",
            "no-such-equipment",
        ])
        .unwrap();
        assert_eq!(
            selection.available_groups(),
            BTreeSet::from([MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Legs])
        );
    }

    #[test]
    fn test_seed_is_selection_order_independent() {
        let a = EquipmentSelection::parse(&["bench-press", "squat-rack"]).unwrap();
        let b = EquipmentSelection::parse(&["squat-rack", "bench-press"]).unwrap();
        assert_eq!(a.seed(), b.seed());
    }
}
