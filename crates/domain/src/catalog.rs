use std::{collections::BTreeMap, sync::LazyLock};

use crate::{EquipmentKind, EquipmentSelection, Mechanic, MuscleGroup};

/// A piece of gym equipment offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equipment {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub kind: Option<EquipmentKind>,
}

/// A movement enabled by exactly one piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub equipment: &'static str,
    pub muscle_group: MuscleGroup,
    pub mechanic: Mechanic,
}

static EQUIPMENT_INDEX: LazyLock<BTreeMap<&'static str, &'static Equipment>> =
    LazyLock::new(|| EQUIPMENT.iter().map(|e| (e.id, e)).collect());

#[must_use]
pub fn equipment(id: &str) -> Option<&'static Equipment> {
    EQUIPMENT_INDEX.get(id).copied()
}

/// All catalog exercises in a muscle group, optionally restricted to one
/// equipment kind.
#[must_use]
pub fn exercises_for(
    group: MuscleGroup,
    kind: Option<EquipmentKind>,
) -> Vec<&'static ExerciseTemplate> {
    EXERCISE_TEMPLATES
        .iter()
        .filter(|t| t.muscle_group == group)
        .filter(|t| match kind {
            Some(kind) => equipment(t.equipment).is_some_and(|e| e.kind == Some(kind)),
            None => true,
        })
        .collect()
}

/// Exercises enabled by the selected equipment, restricted to the given
/// muscle groups. Order follows the catalog, not the selection, so equal
/// selections always yield equal candidate lists.
#[must_use]
pub fn available_templates(
    selection: &EquipmentSelection,
    groups: &[MuscleGroup],
) -> Vec<&'static ExerciseTemplate> {
    let selected = selection.catalog_ids();
    EXERCISE_TEMPLATES
        .iter()
        .filter(|t| selected.contains(t.equipment) && groups.contains(&t.muscle_group))
        .collect()
}

const EQUIPMENT: [Equipment; 60] = [
    // Chest
    Equipment {
        id: "chest-press",
        name: "Chest Press Machine",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "pec-deck",
        name: "Pec Deck",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "dip-machine",
        name: "Dip Machine",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "cable-fly",
        name: "Cable Fly Station",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "bench-press",
        name: "Bench Press",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "incline-bench",
        name: "Incline Bench",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "decline-bench",
        name: "Decline Bench",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "db-bench-press",
        name: "Dumbbell Bench",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-incline-press",
        name: "Dumbbell Incline Bench",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-fly",
        name: "Dumbbells (Fly)",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-pullover",
        name: "Dumbbells (Pullover)",
        muscle_group: MuscleGroup::Chest,
        kind: Some(EquipmentKind::Dumbbell),
    },
    // Shoulder
    Equipment {
        id: "shoulder-press",
        name: "Shoulder Press Machine",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "lateral-raise-machine",
        name: "Lateral Raise Machine",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "cable-lateral",
        name: "Cable Station (Lateral Raise)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "face-pull",
        name: "Cable Station (Face Pull)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "bb-shoulder-press",
        name: "Barbell (Shoulder Press)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "bb-upright-row",
        name: "Barbell (Upright Row)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "bb-front-raise",
        name: "Barbell (Front Raise)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "db-shoulder-press",
        name: "Dumbbells (Shoulder Press)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-lateral-raise",
        name: "Dumbbells (Lateral Raise)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-rear-delt-fly",
        name: "Dumbbells (Rear Delt Fly)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-front-raise",
        name: "Dumbbells (Front Raise)",
        muscle_group: MuscleGroup::Shoulder,
        kind: Some(EquipmentKind::Dumbbell),
    },
    // Back
    Equipment {
        id: "lat-pulldown",
        name: "Lat Pulldown Machine",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "seated-row",
        name: "Seated Row Machine",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "cable-row",
        name: "Cable Row Station",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "back-extension",
        name: "Back Extension Machine",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "bb-bent-over-row",
        name: "Barbell (Bent-Over Row)",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "bb-deadlift",
        name: "Barbell (Deadlift)",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "t-bar-row",
        name: "T-Bar Row",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "db-row",
        name: "Dumbbells (Row)",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-pullover-back",
        name: "Dumbbells (Pullover)",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-shrug",
        name: "Dumbbells (Shrug)",
        muscle_group: MuscleGroup::Back,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "pull-up-bar",
        name: "Pull-Up Bar",
        muscle_group: MuscleGroup::Back,
        kind: None,
    },
    // Legs
    Equipment {
        id: "leg-press",
        name: "Leg Press Machine",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "leg-extension",
        name: "Leg Extension Machine",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "leg-curl",
        name: "Leg Curl Machine",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "hack-squat",
        name: "Hack Squat Machine",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "calf-raise",
        name: "Calf Raise Machine",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "squat-rack",
        name: "Squat Rack",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "bb-romanian-deadlift",
        name: "Barbell (Romanian Deadlift)",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "bb-lunge",
        name: "Barbell (Lunge)",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "db-squat",
        name: "Dumbbells (Squat)",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-lunge",
        name: "Dumbbells (Lunge)",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-romanian-deadlift",
        name: "Dumbbells (Romanian Deadlift)",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "hip-thrust",
        name: "Hip Thrust Bench",
        muscle_group: MuscleGroup::Legs,
        kind: Some(EquipmentKind::Dumbbell),
    },
    // Arms
    Equipment {
        id: "bicep-curl-machine",
        name: "Biceps Curl Machine",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "tricep-pushdown",
        name: "Cable Station (Pushdown)",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "cable-curl",
        name: "Cable Station (Curl)",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "bb-bicep-curl",
        name: "Barbell (Curl)",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "ez-bar",
        name: "EZ Bar",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "bb-tricep-extension",
        name: "Barbell (Triceps Extension)",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Barbell),
    },
    Equipment {
        id: "db-bicep-curl",
        name: "Dumbbells (Curl)",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "db-tricep-extension",
        name: "Dumbbells (Triceps Extension)",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "preacher-curl",
        name: "Preacher Curl Bench",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Dumbbell),
    },
    Equipment {
        id: "dumbbell-rack",
        name: "Dumbbell Rack",
        muscle_group: MuscleGroup::Arms,
        kind: Some(EquipmentKind::Dumbbell),
    },
    // Core
    Equipment {
        id: "ab-crunch",
        name: "Ab Crunch Machine",
        muscle_group: MuscleGroup::Core,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "cable-crunch",
        name: "Cable Station (Crunch)",
        muscle_group: MuscleGroup::Core,
        kind: Some(EquipmentKind::Machine),
    },
    Equipment {
        id: "roman-chair",
        name: "Roman Chair",
        muscle_group: MuscleGroup::Core,
        kind: None,
    },
    Equipment {
        id: "ab-roller",
        name: "Ab Wheel",
        muscle_group: MuscleGroup::Core,
        kind: None,
    },
    Equipment {
        id: "hanging-leg-raise",
        name: "Hanging Leg Raise Station",
        muscle_group: MuscleGroup::Core,
        kind: None,
    },
];

const EXERCISE_TEMPLATES: [ExerciseTemplate; 60] = [
    // Chest
    ExerciseTemplate {
        name: "Chest Press",
        equipment: "chest-press",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Pec Deck Fly",
        equipment: "pec-deck",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Machine Dip",
        equipment: "dip-machine",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Cable Fly",
        equipment: "cable-fly",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Bench Press",
        equipment: "bench-press",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Incline Bench Press",
        equipment: "incline-bench",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Decline Bench Press",
        equipment: "decline-bench",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Bench Press",
        equipment: "db-bench-press",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Incline Press",
        equipment: "db-incline-press",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Fly",
        equipment: "db-fly",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Dumbbell Pullover",
        equipment: "db-pullover",
        muscle_group: MuscleGroup::Chest,
        mechanic: Mechanic::Isolation,
    },
    // Shoulder
    ExerciseTemplate {
        name: "Machine Shoulder Press",
        equipment: "shoulder-press",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Machine Lateral Raise",
        equipment: "lateral-raise-machine",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Cable Lateral Raise",
        equipment: "cable-lateral",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Face Pull",
        equipment: "face-pull",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Barbell Shoulder Press",
        equipment: "bb-shoulder-press",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Barbell Upright Row",
        equipment: "bb-upright-row",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Barbell Front Raise",
        equipment: "bb-front-raise",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Dumbbell Shoulder Press",
        equipment: "db-shoulder-press",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Lateral Raise",
        equipment: "db-lateral-raise",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Dumbbell Rear Delt Fly",
        equipment: "db-rear-delt-fly",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Dumbbell Front Raise",
        equipment: "db-front-raise",
        muscle_group: MuscleGroup::Shoulder,
        mechanic: Mechanic::Isolation,
    },
    // Back
    ExerciseTemplate {
        name: "Lat Pulldown",
        equipment: "lat-pulldown",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Seated Row",
        equipment: "seated-row",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Cable Row",
        equipment: "cable-row",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Back Extension",
        equipment: "back-extension",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Barbell Bent-Over Row",
        equipment: "bb-bent-over-row",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Barbell Deadlift",
        equipment: "bb-deadlift",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "T-Bar Row",
        equipment: "t-bar-row",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Row",
        equipment: "db-row",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    // Same movement as the chest pullover, reachable via two equipment
    // entries. The selector de-duplicates by name.
    ExerciseTemplate {
        name: "Dumbbell Pullover",
        equipment: "db-pullover-back",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Dumbbell Shrug",
        equipment: "db-shrug",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Pull-Up",
        equipment: "pull-up-bar",
        muscle_group: MuscleGroup::Back,
        mechanic: Mechanic::Compound,
    },
    // Legs
    ExerciseTemplate {
        name: "Leg Press",
        equipment: "leg-press",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Leg Extension",
        equipment: "leg-extension",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Leg Curl",
        equipment: "leg-curl",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Hack Squat",
        equipment: "hack-squat",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Calf Raise",
        equipment: "calf-raise",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Barbell Squat",
        equipment: "squat-rack",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Barbell Romanian Deadlift",
        equipment: "bb-romanian-deadlift",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Barbell Lunge",
        equipment: "bb-lunge",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Squat",
        equipment: "db-squat",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Lunge",
        equipment: "db-lunge",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Dumbbell Romanian Deadlift",
        equipment: "db-romanian-deadlift",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    ExerciseTemplate {
        name: "Hip Thrust",
        equipment: "hip-thrust",
        muscle_group: MuscleGroup::Legs,
        mechanic: Mechanic::Compound,
    },
    // Arms
    ExerciseTemplate {
        name: "Machine Biceps Curl",
        equipment: "bicep-curl-machine",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Triceps Pushdown",
        equipment: "tricep-pushdown",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Cable Curl",
        equipment: "cable-curl",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Barbell Curl",
        equipment: "bb-bicep-curl",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "EZ-Bar Curl",
        equipment: "ez-bar",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Barbell Triceps Extension",
        equipment: "bb-tricep-extension",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Dumbbell Curl",
        equipment: "db-bicep-curl",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Dumbbell Triceps Extension",
        equipment: "db-tricep-extension",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Preacher Curl",
        equipment: "preacher-curl",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Hammer Curl",
        equipment: "dumbbell-rack",
        muscle_group: MuscleGroup::Arms,
        mechanic: Mechanic::Isolation,
    },
    // Core
    ExerciseTemplate {
        name: "Machine Crunch",
        equipment: "ab-crunch",
        muscle_group: MuscleGroup::Core,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Cable Crunch",
        equipment: "cable-crunch",
        muscle_group: MuscleGroup::Core,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Roman Chair Back Extension",
        equipment: "roman-chair",
        muscle_group: MuscleGroup::Core,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Ab Wheel Rollout",
        equipment: "ab-roller",
        muscle_group: MuscleGroup::Core,
        mechanic: Mechanic::Isolation,
    },
    ExerciseTemplate {
        name: "Hanging Leg Raise",
        equipment: "hanging-leg-raise",
        muscle_group: MuscleGroup::Core,
        mechanic: Mechanic::Isolation,
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_equipment_lookup() {
        assert_eq!(equipment("bench-press").unwrap().name, "Bench Press");
        assert_eq!(
            equipment("bench-press").unwrap().kind,
            Some(EquipmentKind::Barbell)
        );
        assert_eq!(equipment("flux-capacitor"), None);
    }

    #[test]
    fn test_every_template_references_known_equipment() {
        for template in &EXERCISE_TEMPLATES {
            let item = equipment(template.equipment)
                .unwrap_or_else(|| panic!("unknown equipment {}", template.equipment));
            assert_eq!(item.muscle_group, template.muscle_group);
        }
    }

    #[test]
    fn test_exercises_for_group() {
        let chest = exercises_for(MuscleGroup::Chest, None);
        assert_eq!(chest.len(), 11);
        assert!(chest.iter().all(|t| t.muscle_group == MuscleGroup::Chest));
    }

    #[test]
    fn test_exercises_for_group_and_kind() {
        let chest_barbell = exercises_for(MuscleGroup::Chest, Some(EquipmentKind::Barbell));
        assert_eq!(
            chest_barbell.iter().map(|t| t.name).collect::<Vec<_>>(),
            vec!["Bench Press", "Incline Bench Press", "Decline Bench Press"]
        );
    }

    #[test]
    fn test_available_templates_restricted_to_selection_and_groups() {
        let selection =
            EquipmentSelection::parse(&["bench-press", "squat-rack", "lat-pulldown"]).unwrap();
        let templates =
            available_templates(&selection, &[MuscleGroup::Chest, MuscleGroup::Back]);
        assert_eq!(
            templates.iter().map(|t| t.name).collect::<Vec<_>>(),
            vec!["Bench Press", "Lat Pulldown"]
        );
    }
}
