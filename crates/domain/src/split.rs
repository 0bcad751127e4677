use std::collections::BTreeSet;

use crate::{Focus, Frequency, MuscleGroup, Property, SplitScheme};

/// The muscle groups trained together on one day, in canonical order.
///
/// An empty grouping is the placeholder for a selection with no equipment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayGrouping(Vec<MuscleGroup>);

impl DayGrouping {
    fn of(groups: &[MuscleGroup], available: &BTreeSet<MuscleGroup>) -> Self {
        Self(
            groups
                .iter()
                .copied()
                .filter(|g| available.contains(g))
                .collect(),
        )
    }

    #[must_use]
    pub fn groups(&self) -> &[MuscleGroup] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn label(&self) -> String {
        if self.0.is_empty() {
            return "No equipment".to_string();
        }
        self.0
            .iter()
            .map(|g| g.name())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    fn contains_any(&self, groups: &[MuscleGroup]) -> bool {
        self.0.iter().any(|g| groups.contains(g))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDay {
    pub grouping: DayGrouping,
    /// 1-based cycle repetition this day belongs to. Rounds beyond the first
    /// repeat a grouping and call for variant movements.
    pub round: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan {
    pub cycle: Vec<DayGrouping>,
    pub days: Vec<PlannedDay>,
}

/// Decides which muscle groups train together on which day and expands the
/// cycle to the requested weekly frequency.
#[must_use]
pub fn plan_days(
    split: SplitScheme,
    focus: Focus,
    frequency: Frequency,
    available: &BTreeSet<MuscleGroup>,
) -> SplitPlan {
    if available.is_empty() {
        let placeholder = DayGrouping::default();
        return SplitPlan {
            cycle: vec![placeholder.clone()],
            days: vec![PlannedDay {
                grouping: placeholder,
                round: 1,
            }],
        };
    }

    let mut cycle = base_cycle(split, available);
    amplify_focus(&mut cycle, focus);

    let days = (0..frequency.days())
        .map(|i| PlannedDay {
            grouping: cycle[i % cycle.len()].clone(),
            round: i / cycle.len() + 1,
        })
        .collect();

    SplitPlan { cycle, days }
}

fn base_cycle(split: SplitScheme, available: &BTreeSet<MuscleGroup>) -> Vec<DayGrouping> {
    let templates: &[&[MuscleGroup]] = match split {
        SplitScheme::FullBody => &[&[
            MuscleGroup::Chest,
            MuscleGroup::Shoulder,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Arms,
            MuscleGroup::Core,
        ]],
        SplitScheme::Two => &[
            &[
                MuscleGroup::Chest,
                MuscleGroup::Shoulder,
                MuscleGroup::Back,
                MuscleGroup::Arms,
            ],
            &[MuscleGroup::Legs],
        ],
        SplitScheme::Three => &[
            &[MuscleGroup::Chest, MuscleGroup::Shoulder],
            &[MuscleGroup::Back, MuscleGroup::Arms],
            &[MuscleGroup::Legs],
        ],
        SplitScheme::Four => &[
            &[MuscleGroup::Chest],
            &[MuscleGroup::Back],
            &[MuscleGroup::Shoulder, MuscleGroup::Arms],
            &[MuscleGroup::Legs],
        ],
        SplitScheme::Five => &[
            &[MuscleGroup::Chest],
            &[MuscleGroup::Shoulder],
            &[MuscleGroup::Back],
            &[MuscleGroup::Legs],
            &[MuscleGroup::Arms],
        ],
    };

    let cycle = templates
        .iter()
        .map(|groups| DayGrouping::of(groups, available))
        .filter(|grouping| !grouping.is_empty())
        .collect::<Vec<_>>();

    if cycle.is_empty() {
        // Possible when the selection covers only groups the scheme does not
        // schedule (e.g. core-only equipment with a 5-split). Degrade to one
        // full-body grouping instead of an empty cycle.
        return vec![DayGrouping::of(
            &MuscleGroup::iter().copied().collect::<Vec<_>>(),
            available,
        )];
    }

    cycle
}

/// Appends a duplicate of the grouping covering the focus target, raising
/// its per-cycle frequency, when exactly one grouping qualifies and the
/// cycle rotates through at least two groupings.
fn amplify_focus(cycle: &mut Vec<DayGrouping>, focus: Focus) {
    if cycle.len() < 2 {
        return;
    }

    let mut qualifying = cycle
        .iter()
        .filter(|grouping| grouping.contains_any(focus.muscle_groups()));
    let (Some(grouping), None) = (qualifying.next(), qualifying.next()) else {
        return;
    };

    let amplified = grouping.clone();
    cycle.push(amplified);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn groups(groups: &[MuscleGroup]) -> DayGrouping {
        DayGrouping(groups.to_vec())
    }

    fn available(list: &[MuscleGroup]) -> BTreeSet<MuscleGroup> {
        list.iter().copied().collect()
    }

    const ALL: [MuscleGroup; 6] = [
        MuscleGroup::Chest,
        MuscleGroup::Shoulder,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Arms,
        MuscleGroup::Core,
    ];

    #[test]
    fn test_empty_selection_yields_single_placeholder_day() {
        let plan = plan_days(
            SplitScheme::Three,
            Focus::Upper,
            Frequency::new(4).unwrap(),
            &BTreeSet::new(),
        );
        assert_eq!(plan.cycle.len(), 1);
        assert_eq!(plan.days.len(), 1);
        assert!(plan.days[0].grouping.is_empty());
        assert_eq!(plan.days[0].grouping.label(), "No equipment");
    }

    #[test]
    fn test_three_split_with_partial_equipment() {
        // Chest and back equipment only: the legs grouping is dropped and
        // both remaining groupings contain upper-body groups, so an upper
        // focus amplifies nothing.
        let plan = plan_days(
            SplitScheme::Three,
            Focus::Upper,
            Frequency::new(3).unwrap(),
            &available(&[MuscleGroup::Chest, MuscleGroup::Back]),
        );
        assert_eq!(
            plan.cycle,
            vec![groups(&[MuscleGroup::Chest]), groups(&[MuscleGroup::Back])]
        );
        assert_eq!(
            plan.days,
            vec![
                PlannedDay {
                    grouping: groups(&[MuscleGroup::Chest]),
                    round: 1,
                },
                PlannedDay {
                    grouping: groups(&[MuscleGroup::Back]),
                    round: 1,
                },
                PlannedDay {
                    grouping: groups(&[MuscleGroup::Chest]),
                    round: 2,
                },
            ]
        );
    }

    #[test]
    fn test_full_body_repeats_with_rounds() {
        let plan = plan_days(
            SplitScheme::FullBody,
            Focus::Upper,
            Frequency::new(4).unwrap(),
            &available(&[MuscleGroup::Legs]),
        );
        assert_eq!(plan.cycle, vec![groups(&[MuscleGroup::Legs])]);
        assert_eq!(plan.days.len(), 4);
        assert_eq!(
            plan.days.iter().map(|d| d.round).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[rstest]
    #[case(Focus::Lower)]
    #[case(Focus::Glutes)]
    fn test_lower_focus_amplifies_leg_day(#[case] focus: Focus) {
        let plan = plan_days(
            SplitScheme::Three,
            focus,
            Frequency::new(4).unwrap(),
            &available(&ALL),
        );
        assert_eq!(
            plan.cycle,
            vec![
                groups(&[MuscleGroup::Chest, MuscleGroup::Shoulder]),
                groups(&[MuscleGroup::Back, MuscleGroup::Arms]),
                groups(&[MuscleGroup::Legs]),
                groups(&[MuscleGroup::Legs]),
            ]
        );
        // The amplified grouping appears twice per cycle round.
        let legs_days = plan
            .days
            .iter()
            .filter(|d| d.grouping == groups(&[MuscleGroup::Legs]))
            .count();
        assert_eq!(legs_days, 2);
    }

    #[test]
    fn test_upper_focus_does_not_amplify_ambiguous_cycle() {
        // In a 3-split, two groupings contain upper-body groups.
        let plan = plan_days(
            SplitScheme::Three,
            Focus::Upper,
            Frequency::new(3).unwrap(),
            &available(&ALL),
        );
        assert_eq!(plan.cycle.len(), 3);
    }

    #[test]
    fn test_two_split_upper_grouping_order_is_canonical() {
        let plan = plan_days(
            SplitScheme::Two,
            Focus::Upper,
            Frequency::new(2).unwrap(),
            &available(&ALL),
        );
        assert_eq!(
            plan.cycle[0],
            groups(&[
                MuscleGroup::Chest,
                MuscleGroup::Shoulder,
                MuscleGroup::Back,
                MuscleGroup::Arms,
            ])
        );
        assert_eq!(plan.cycle[0].label(), "Chest + Shoulder + Back + Arms");
    }

    #[test]
    fn test_four_split_drops_unavailable_days() {
        let plan = plan_days(
            SplitScheme::Four,
            Focus::Upper,
            Frequency::new(4).unwrap(),
            &available(&[MuscleGroup::Back, MuscleGroup::Legs]),
        );
        assert_eq!(
            plan.cycle,
            vec![groups(&[MuscleGroup::Back]), groups(&[MuscleGroup::Legs])]
        );
    }

    #[test]
    fn test_core_only_selection_degrades_to_full_body_grouping() {
        let plan = plan_days(
            SplitScheme::Five,
            Focus::Upper,
            Frequency::new(2).unwrap(),
            &available(&[MuscleGroup::Core]),
        );
        assert_eq!(plan.cycle, vec![groups(&[MuscleGroup::Core])]);
        assert_eq!(plan.days.len(), 2);
    }

    #[test]
    fn test_day_count_matches_frequency() {
        for frequency in 1..=7 {
            let plan = plan_days(
                SplitScheme::Five,
                Focus::Lower,
                Frequency::new(frequency).unwrap(),
                &available(&ALL),
            );
            assert_eq!(plan.days.len(), usize::from(frequency));
        }
    }
}
