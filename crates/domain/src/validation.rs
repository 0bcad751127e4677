//! Routine invariants, shared between the deterministic assembler (which
//! satisfies them by construction) and the validation of externally
//! produced candidate routines (which are rejected, never repaired).

use std::collections::BTreeSet;

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::routine::{DayPlan, Exercise, Routine};

pub const MAX_EXERCISES_PER_DAY: usize = 6;
pub const MAX_SETS_PER_EXERCISE: u32 = 6;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("day {day}: {count} exercises exceed the limit of {MAX_EXERCISES_PER_DAY}")]
    TooManyExercises { day: usize, count: usize },
    #[error("day {day}: exercise \"{name}\" appears more than once")]
    DuplicateExercise { day: usize, name: String },
    #[error("day {day}: \"{name}\" has {sets} sets, more than the limit of {MAX_SETS_PER_EXERCISE}")]
    TooManySets { day: usize, name: String, sets: u32 },
}

/// Checks a candidate routine against the hard ceilings. Accept or reject
/// only; the caller discards a rejected candidate.
pub fn validate(routine: &Routine) -> Result<(), ValidationError> {
    for (i, day) in routine.days.iter().enumerate() {
        if let Err(error) = check_day(i + 1, day) {
            debug!("rejecting candidate routine: {error}");
            return Err(error);
        }
    }
    Ok(())
}

fn check_day(day: usize, plan: &DayPlan) -> Result<(), ValidationError> {
    if plan.exercises.len() > MAX_EXERCISES_PER_DAY {
        return Err(ValidationError::TooManyExercises {
            day,
            count: plan.exercises.len(),
        });
    }

    let mut names = BTreeSet::new();
    for exercise in &plan.exercises {
        if !names.insert(exercise.name.as_str()) {
            return Err(ValidationError::DuplicateExercise {
                day,
                name: exercise.name.clone(),
            });
        }
        if exercise.sets > MAX_SETS_PER_EXERCISE {
            return Err(ValidationError::TooManySets {
                day,
                name: exercise.name.clone(),
                sets: exercise.sets,
            });
        }
    }

    Ok(())
}

/// Coerces an externally produced JSON candidate into the routine shape.
///
/// External generators are loose with field names and number types, so
/// alternate spellings are accepted and missing values are defaulted. Only
/// the shape is fixed here; invariants are enforced separately by
/// [`validate`].
#[must_use]
pub fn normalize(value: &Value, default_name: &str) -> Routine {
    let days = value
        .get("days")
        .and_then(Value::as_array)
        .map(|days| {
            days.iter()
                .enumerate()
                .map(|(i, day)| DayPlan {
                    day: string_field(day, &["day"]).unwrap_or_else(|| format!("Day {}", i + 1)),
                    focus: string_field(day, &["focus", "muscleGroups"]).unwrap_or_default(),
                    note: string_field(day, &["note"]),
                    exercises: day
                        .get("exercises")
                        .and_then(Value::as_array)
                        .map(|exercises| {
                            exercises
                                .iter()
                                .map(|exercise| Exercise {
                                    name: string_field(exercise, &["name", "exercise"])
                                        .unwrap_or_default(),
                                    sets: number_field(exercise, "sets").unwrap_or(3),
                                    reps: number_field(exercise, "reps").unwrap_or(10),
                                    rest: string_field(exercise, &["rest", "restTime"])
                                        .unwrap_or_else(|| "60 s".to_string()),
                                })
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    Routine {
        name: string_field(value, &["routineName"])
            .unwrap_or_else(|| default_name.to_string()),
        description: string_field(value, &["description"]).unwrap_or_default(),
        days,
        tips: value
            .get("tips")
            .and_then(Value::as_array)
            .map(|tips| {
                tips.iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(key))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

fn number_field(value: &Value, key: &str) -> Option<u32> {
    let value = value.get(key)?;
    if let Some(number) = value.as_u64() {
        return u32::try_from(number).ok();
    }
    value.as_str().and_then(|s| s.parse().ok())
}
