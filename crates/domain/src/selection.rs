use std::collections::BTreeSet;

use crate::{
    ExerciseTemplate, ExperienceLevel, Goal, Mechanic, PlanProfile, rng::Lcg, routine::Exercise,
};

/// Set/rep/rest ranges and per-day caps for one training profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScheme {
    pub sets: (u32, u32),
    pub reps: (u32, u32),
    pub rest_seconds: (u32, u32),
    /// Compound movements allowed per day. Compounds are scheduled first
    /// and crowd out isolations, so their count is bounded separately.
    pub max_compounds: usize,
    pub max_exercises: usize,
}

impl PlanProfile {
    #[must_use]
    pub fn set_scheme(self) -> SetScheme {
        match self {
            // Intermediate lifters train on the hypertrophy parameters.
            PlanProfile::Goal(Goal::Hypertrophy)
            | PlanProfile::Experience(ExperienceLevel::Intermediate) => SetScheme {
                sets: (3, 4),
                reps: (8, 12),
                rest_seconds: (60, 90),
                max_compounds: 3,
                max_exercises: 5,
            },
            PlanProfile::Goal(Goal::FatLoss) => SetScheme {
                sets: (3, 4),
                reps: (12, 15),
                rest_seconds: (30, 45),
                max_compounds: 3,
                max_exercises: 5,
            },
            PlanProfile::Goal(Goal::Beginner)
            | PlanProfile::Experience(ExperienceLevel::Beginner) => SetScheme {
                sets: (3, 3),
                reps: (10, 12),
                rest_seconds: (60, 90),
                max_compounds: 2,
                max_exercises: 4,
            },
            PlanProfile::Goal(Goal::Maintenance) => SetScheme {
                sets: (3, 3),
                reps: (10, 12),
                rest_seconds: (60, 60),
                max_compounds: 3,
                max_exercises: 5,
            },
            PlanProfile::Experience(ExperienceLevel::Advanced) => SetScheme {
                sets: (4, 5),
                reps: (6, 10),
                rest_seconds: (90, 150),
                max_compounds: 4,
                max_exercises: 5,
            },
        }
    }
}

/// Builds one day's exercise list from the candidate templates.
///
/// Compounds come first, each partition is shuffled deterministically from
/// the seed, the list is capped and de-duplicated by name, and set/rep/rest
/// values are drawn reproducibly from `(seed, index)`. A day with no
/// candidates gets a single placeholder entry, never an empty list.
#[must_use]
pub fn select_exercises(
    candidates: &[&'static ExerciseTemplate],
    scheme: &SetScheme,
    seed: u64,
) -> Vec<Exercise> {
    let (mut compounds, mut isolations): (Vec<_>, Vec<_>) = candidates
        .iter()
        .copied()
        .partition(|t| t.mechanic == Mechanic::Compound);

    Lcg::new(seed).shuffle(&mut compounds);
    Lcg::new(seed + 1).shuffle(&mut isolations);
    compounds.truncate(scheme.max_compounds);

    let mut seen = BTreeSet::new();
    let exercises = compounds
        .into_iter()
        .chain(isolations)
        .take(scheme.max_exercises)
        .filter(|t: &&'static ExerciseTemplate| seen.insert(t.name))
        .enumerate()
        .map(|(i, t)| {
            let i = i as u64;
            Exercise {
                name: t.name.to_string(),
                sets: Lcg::new(seed + i * 7).in_range(scheme.sets.0, scheme.sets.1),
                reps: Lcg::new(seed + i * 13).in_range(scheme.reps.0, scheme.reps.1),
                rest: format!(
                    "{} s",
                    Lcg::new(seed + i * 19).in_range(scheme.rest_seconds.0, scheme.rest_seconds.1)
                ),
            }
        })
        .collect::<Vec<_>>();

    if exercises.is_empty() {
        return vec![Exercise::placeholder()];
    }

    exercises
}
