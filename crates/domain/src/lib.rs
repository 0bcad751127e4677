#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod equipment;
pub mod rng;
pub mod routine;
pub mod selection;
pub mod split;
pub mod validation;

use std::{
    fmt::{self, Display},
    slice::Iter,
};

use derive_more::Into;
use thiserror::Error;

pub use catalog::{Equipment, ExerciseTemplate};
pub use equipment::{EquipmentID, EquipmentIDError, EquipmentSelection};
pub use routine::{DayPlan, Exercise, GenerationInput, Routine, generate};
pub use selection::SetScheme;
pub use split::{DayGrouping, PlannedDay, SplitPlan};
pub use validation::{ValidationError, normalize, validate};

/// Closed sets of values presented as selectable options by the wizard UI.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Shoulder,
    Back,
    Legs,
    Arms,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static GROUPS: [MuscleGroup; 6] = [
            MuscleGroup::Chest,
            MuscleGroup::Shoulder,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Arms,
            MuscleGroup::Core,
        ];
        GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Shoulder => "Shoulder",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
        }
    }
}

impl MuscleGroup {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Shoulder => "shoulder",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Core => "core",
        }
    }
}

impl Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "chest" => Ok(MuscleGroup::Chest),
            "shoulder" => Ok(MuscleGroup::Shoulder),
            "back" => Ok(MuscleGroup::Back),
            "legs" => Ok(MuscleGroup::Legs),
            // Arm sub-groups collapse into a single planning unit.
            "arms" | "arms-bicep" | "arms-tricep" => Ok(MuscleGroup::Arms),
            "core" => Ok(MuscleGroup::Core),
            _ => Err(MuscleGroupError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("unknown muscle group \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum EquipmentKind {
    Machine,
    Barbell,
    Dumbbell,
}

impl Property for EquipmentKind {
    fn iter() -> Iter<'static, EquipmentKind> {
        static KINDS: [EquipmentKind; 3] = [
            EquipmentKind::Machine,
            EquipmentKind::Barbell,
            EquipmentKind::Dumbbell,
        ];
        KINDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EquipmentKind::Machine => "Machine",
            EquipmentKind::Barbell => "Barbell",
            EquipmentKind::Dumbbell => "Dumbbell",
        }
    }
}

impl EquipmentKind {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            EquipmentKind::Machine => "machine",
            EquipmentKind::Barbell => "barbell",
            EquipmentKind::Dumbbell => "dumbbell",
        }
    }
}

impl Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for EquipmentKind {
    type Error = EquipmentKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "machine" => Ok(EquipmentKind::Machine),
            "barbell" => Ok(EquipmentKind::Barbell),
            "dumbbell" => Ok(EquipmentKind::Dumbbell),
            _ => Err(EquipmentKindError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EquipmentKindError {
    #[error("unknown equipment kind \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "Compound",
            Mechanic::Isolation => "Isolation",
        }
    }
}

/// Weekly training frequency in days, 1 to 7.
#[derive(Debug, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u8);

impl Frequency {
    pub fn new(value: u8) -> Result<Self, FrequencyError> {
        if !(1..=7).contains(&value) {
            return Err(FrequencyError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn days(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<&str> for Frequency {
    type Error = FrequencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u8>() {
            Ok(parsed_value) => Frequency::new(parsed_value),
            Err(_) => Err(FrequencyError::ParseError),
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum FrequencyError {
    #[error("frequency must be in the range 1 to 7 days per week ({0} is not)")]
    OutOfRange(u8),
    #[error("frequency must be an integer")]
    ParseError,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SplitScheme {
    FullBody,
    Two,
    Three,
    Four,
    Five,
}

impl Property for SplitScheme {
    fn iter() -> Iter<'static, SplitScheme> {
        static SCHEMES: [SplitScheme; 5] = [
            SplitScheme::FullBody,
            SplitScheme::Two,
            SplitScheme::Three,
            SplitScheme::Four,
            SplitScheme::Five,
        ];
        SCHEMES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SplitScheme::FullBody => "Full body",
            SplitScheme::Two => "2-split",
            SplitScheme::Three => "3-split",
            SplitScheme::Four => "4-split",
            SplitScheme::Five => "5-split",
        }
    }
}

impl SplitScheme {
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            SplitScheme::FullBody => 0,
            SplitScheme::Two => 2,
            SplitScheme::Three => 3,
            SplitScheme::Four => 4,
            SplitScheme::Five => 5,
        }
    }
}

impl TryFrom<&str> for SplitScheme {
    type Error = SplitSchemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "0" => Ok(SplitScheme::FullBody),
            "2" => Ok(SplitScheme::Two),
            "3" => Ok(SplitScheme::Three),
            "4" => Ok(SplitScheme::Four),
            "5" => Ok(SplitScheme::Five),
            _ => Err(SplitSchemeError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SplitSchemeError {
    #[error("unknown split scheme \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Focus {
    Upper,
    Lower,
    Glutes,
}

impl Property for Focus {
    fn iter() -> Iter<'static, Focus> {
        static FOCUSES: [Focus; 3] = [Focus::Upper, Focus::Lower, Focus::Glutes];
        FOCUSES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Focus::Upper => "Upper body",
            Focus::Lower => "Lower body",
            Focus::Glutes => "Glutes",
        }
    }
}

impl Focus {
    /// Muscle groups whose training frequency this focus amplifies.
    #[must_use]
    pub fn muscle_groups(self) -> &'static [MuscleGroup] {
        match self {
            Focus::Upper => &[
                MuscleGroup::Chest,
                MuscleGroup::Shoulder,
                MuscleGroup::Back,
                MuscleGroup::Arms,
            ],
            Focus::Lower | Focus::Glutes => &[MuscleGroup::Legs],
        }
    }
}

impl TryFrom<&str> for Focus {
    type Error = FocusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "upper" => Ok(Focus::Upper),
            "lower" => Ok(Focus::Lower),
            "glutes" => Ok(Focus::Glutes),
            _ => Err(FocusError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum FocusError {
    #[error("unknown focus \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for ExperienceLevel {
    fn iter() -> Iter<'static, ExperienceLevel> {
        static LEVELS: [ExperienceLevel; 3] = [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl TryFrom<&str> for ExperienceLevel {
    type Error = ExperienceLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(ExperienceLevelError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ExperienceLevelError {
    #[error("unknown experience level \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Goal {
    Hypertrophy,
    FatLoss,
    Beginner,
    Maintenance,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 4] = [
            Goal::Hypertrophy,
            Goal::FatLoss,
            Goal::Beginner,
            Goal::Maintenance,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Hypertrophy => "Hypertrophy",
            Goal::FatLoss => "Fat loss",
            Goal::Beginner => "Beginner",
            Goal::Maintenance => "Maintenance",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "hypertrophy" => Ok(Goal::Hypertrophy),
            "fat-loss" => Ok(Goal::FatLoss),
            "beginner" => Ok(Goal::Beginner),
            "maintenance" => Ok(Goal::Maintenance),
            _ => Err(GoalError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("unknown goal \"{0}\"")]
    Unknown(String),
}

/// Strategy selecting the set/rep/rest parameter table and tip pool.
///
/// The two variants correspond to the two generations of the wizard input
/// shape. They configure the same engine and are never combined.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlanProfile {
    Experience(ExperienceLevel),
    Goal(Goal),
}

impl PlanProfile {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlanProfile::Experience(level) => level.name(),
            PlanProfile::Goal(goal) => goal.name(),
        }
    }
}
