use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    EquipmentSelection, ExperienceLevel, Focus, Frequency, Goal, PlanProfile, SplitScheme,
    catalog, selection, split, validation,
};

/// A resolved exercise with its training parameters, as rendered to the
/// user and as exchanged with the AI-backed generation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub rest: String,
}

impl Exercise {
    /// Sentinel emitted when the selected equipment cannot cover a day's
    /// muscle groups. A day is never empty.
    #[must_use]
    pub(crate) fn placeholder() -> Self {
        Self {
            name: "Add equipment for this muscle group".to_string(),
            sets: 0,
            reps: 0,
            rest: "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    #[serde(rename = "routineName")]
    pub name: String,
    pub description: String,
    pub days: Vec<DayPlan>,
    pub tips: Vec<String>,
}

/// One generation request. Constructed fresh per wizard session; all
/// string-keyed wizard values are decoded before this point.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationInput {
    pub equipment: EquipmentSelection,
    pub frequency: Frequency,
    pub split: SplitScheme,
    pub focus: Focus,
    pub profile: PlanProfile,
}

impl GenerationInput {
    /// Seed of the deterministic generator: a pure function of the encoded
    /// equipment ids, the frequency and the split scheme.
    #[must_use]
    fn seed(&self) -> u64 {
        self.equipment.seed()
            + u64::from(u8::from(self.frequency)) * 7
            + u64::from(self.split.number()) * 13
    }
}

/// Builds a complete routine from the wizard input. Pure and deterministic;
/// identical inputs produce identical routines.
#[must_use]
pub fn generate(input: &GenerationInput) -> Routine {
    let scheme = input.profile.set_scheme();
    let available = input.equipment.available_groups();
    let plan = split::plan_days(input.split, input.focus, input.frequency, &available);
    let seed = input.seed();

    let days = plan
        .days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let candidates =
                catalog::available_templates(&input.equipment, day.grouping.groups());
            let exercises =
                selection::select_exercises(&candidates, &scheme, seed + i as u64 * 100);
            DayPlan {
                day: format!("Day {}", i + 1),
                focus: day.grouping.label(),
                note: (day.round > 1).then(|| {
                    format!(
                        "Cycle round {}. Prefer variant movements over the previous round.",
                        day.round
                    )
                }),
                exercises,
            }
        })
        .collect::<Vec<_>>();

    let routine = Routine {
        name: format!("{} {} routine", input.profile.label(), split_label(input.split)),
        description: format!(
            "A {} {} program, {} days per week, built around {} selected equipment items.",
            split_label(input.split),
            input.profile.label().to_lowercase(),
            input.frequency,
            input.equipment.named_count(),
        ),
        days,
        tips: tips(input.profile).iter().map(ToString::to_string).collect(),
    };

    debug!(
        "generated routine \"{}\": {} days, {} exercises",
        routine.name,
        routine.days.len(),
        routine.days.iter().map(|d| d.exercises.len()).sum::<usize>()
    );
    debug_assert!(validation::validate(&routine).is_ok());

    routine
}

fn split_label(split: SplitScheme) -> &'static str {
    match split {
        SplitScheme::FullBody => "full-body",
        SplitScheme::Two => "2-split",
        SplitScheme::Three => "3-split",
        SplitScheme::Four => "4-split",
        SplitScheme::Five => "5-split",
    }
}

fn tips(profile: PlanProfile) -> &'static [&'static str] {
    match profile {
        PlanProfile::Goal(Goal::Hypertrophy)
        | PlanProfile::Experience(ExperienceLevel::Intermediate) => &[
            "Apply progressive overload: add a little weight or a repetition every week.",
            "Stay aware of the contraction and stretch of the working muscle during every set.",
            "Aim for 1.6 to 2.2 g of protein per kilogram of body weight per day.",
            "Sleep 7 to 9 hours; growth happens during recovery.",
            "Keep rest periods consistent to maintain training intensity.",
        ],
        PlanProfile::Goal(Goal::FatLoss) => &[
            "Keep rest periods short to hold your heart rate up.",
            "Stay in a calorie deficit, but do not cut protein.",
            "Add cardio sessions alongside lifting for faster fat loss.",
            "Stretch after training to support recovery.",
            "Drink plenty of water to keep your metabolism active.",
        ],
        PlanProfile::Goal(Goal::Beginner) | PlanProfile::Experience(ExperienceLevel::Beginner) => &[
            "Learn correct form first and increase the weight slowly.",
            "Start light to avoid injury.",
            "Warm up for 5 to 10 minutes before every session.",
            "Stop immediately and check your form if you feel pain.",
            "Consistency beats intensity: build a routine you can sustain.",
        ],
        PlanProfile::Goal(Goal::Maintenance) => &[
            "The aim is to hold your current strength, so avoid sudden weight jumps.",
            "Keep training frequency and intensity steady.",
            "Maintain a balanced diet to support your current condition.",
            "Manage stress and sleep; both matter for maintenance.",
            "Vary the routine slightly from time to time to keep the stimulus fresh.",
        ],
        PlanProfile::Experience(ExperienceLevel::Advanced) => &[
            "Periodize your training: alternate heavy and lighter weeks.",
            "Track every working set; small regressions are the first sign of overreaching.",
            "Use longer rests on heavy compounds to keep bar speed high.",
            "Rotate exercise variants between cycles to keep progressing.",
            "Schedule a deload week when progress stalls for more than two weeks.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn input(equipment: &[&str], frequency: u8, split: SplitScheme) -> GenerationInput {
        GenerationInput {
            equipment: EquipmentSelection::parse(equipment).unwrap(),
            frequency: Frequency::new(frequency).unwrap(),
            split,
            focus: Focus::Upper,
            profile: PlanProfile::Experience(ExperienceLevel::Intermediate),
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let input = input(
            &["bench-press", "lat-pulldown", "squat-rack", "db-bicep-curl"],
            4,
            SplitScheme::Three,
        );
        let a = serde_json::to_string(&generate(&input)).unwrap();
        let b = serde_json::to_string(&generate(&input)).unwrap();
        assert_eq!(a, b);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(7)]
    fn test_day_count_matches_frequency(#[case] frequency: u8) {
        let routine = generate(&input(
            &["bench-press", "lat-pulldown", "squat-rack"],
            frequency,
            SplitScheme::Three,
        ));
        assert_eq!(routine.days.len(), usize::from(frequency));
    }

    #[test]
    fn test_no_day_is_empty() {
        // Custom equipment makes the back group available but carries no
        // catalog-backed exercises, so the back day gets the placeholder
        // instead of being empty.
        let routine = generate(&input(
            &["bench-press", "custom-back-Rowing Ergometer"],
            3,
            SplitScheme::Three,
        ));
        for day in &routine.days {
            assert!(!day.exercises.is_empty());
        }
        assert_eq!(routine.days[1].focus, "Back");
        assert_eq!(routine.days[1].exercises, vec![Exercise::placeholder()]);
    }

    #[test]
    fn test_empty_selection_yields_single_placeholder_day() {
        let routine = generate(&input(&[], 4, SplitScheme::Three));
        assert_eq!(routine.days.len(), 1);
        assert_eq!(routine.days[0].focus, "No equipment");
        assert_eq!(routine.days[0].exercises, vec![Exercise::placeholder()]);
        assert_eq!(routine.days[0].exercises[0].rest, "-");
    }

    #[test]
    fn test_partial_three_split_scenario() {
        // Chest and back equipment, 3 days: chest, back, chest again with a
        // second-round note.
        let routine = generate(&input(
            &["bench-press", "lat-pulldown"],
            3,
            SplitScheme::Three,
        ));
        assert_eq!(
            routine.days.iter().map(|d| d.focus.as_str()).collect::<Vec<_>>(),
            vec!["Chest", "Back", "Chest"]
        );
        assert_eq!(routine.days[0].note, None);
        assert_eq!(routine.days[1].note, None);
        assert!(routine.days[2].note.as_deref().unwrap().contains("round 2"));
    }

    #[test]
    fn test_full_body_repeats_with_round_notes() {
        let routine = generate(&input(&["squat-rack"], 4, SplitScheme::FullBody));
        assert_eq!(routine.days.len(), 4);
        assert_eq!(routine.days[0].note, None);
        for (day, round) in routine.days[1..].iter().zip(2..) {
            assert_eq!(day.focus, "Legs");
            assert!(day.note.as_deref().unwrap().contains(&format!("round {round}")));
        }
    }

    #[test]
    fn test_name_and_description() {
        let routine = generate(&GenerationInput {
            profile: PlanProfile::Goal(Goal::Hypertrophy),
            ..input(&["bench-press", "lat-pulldown"], 3, SplitScheme::Three)
        });
        assert_eq!(routine.name, "Hypertrophy 3-split routine");
        assert_eq!(
            routine.description,
            "A 3-split hypertrophy program, 3 days per week, built around 2 selected equipment items."
        );
        assert_eq!(routine.tips.len(), 5);
    }

    #[test]
    fn test_generated_routines_always_validate() {
        let profiles = [
            PlanProfile::Goal(Goal::Hypertrophy),
            PlanProfile::Goal(Goal::FatLoss),
            PlanProfile::Goal(Goal::Beginner),
            PlanProfile::Goal(Goal::Maintenance),
            PlanProfile::Experience(ExperienceLevel::Beginner),
            PlanProfile::Experience(ExperienceLevel::Intermediate),
            PlanProfile::Experience(ExperienceLevel::Advanced),
        ];
        let equipment = [
            "bench-press",
            "db-pullover",
            "db-pullover-back",
            "lat-pulldown",
            "squat-rack",
            "leg-press",
            "db-bicep-curl",
            "shoulder-press",
            "ab-roller",
        ];
        for profile in profiles {
            for split in [
                SplitScheme::FullBody,
                SplitScheme::Two,
                SplitScheme::Three,
                SplitScheme::Four,
                SplitScheme::Five,
            ] {
                for frequency in 1..=7 {
                    let routine = generate(&GenerationInput {
                        profile,
                        ..input(&equipment, frequency, split)
                    });
                    assert_eq!(validation::validate(&routine), Ok(()));
                }
            }
        }
    }

    #[test]
    fn test_wire_format_field_names() {
        let routine = generate(&input(&["bench-press"], 1, SplitScheme::FullBody));
        let value = serde_json::to_value(&routine).unwrap();
        assert!(value.get("routineName").is_some());
        assert!(value.get("days").unwrap()[0].get("focus").is_some());
        assert!(value.get("days").unwrap()[0].get("note").is_none());
    }
}
