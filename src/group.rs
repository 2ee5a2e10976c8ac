//! Day grouping: fold a flat plan into per-day buckets.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Itinerary, PlanEntry};

/// Group a flat plan into an [`Itinerary`].
///
/// A single scan with a cursor on the current day: a `DayStart` moves the
/// cursor (opening a bucket if this day hasn't been seen), an activity
/// lands in the cursor's bucket. Activities that appear before any
/// `DayStart` have no day to go to and are dropped.
///
/// Days come out in the order they first appear; activities keep their order.
pub fn group_by_day(entries: &[PlanEntry]) -> Itinerary {
    let mut itinerary = Itinerary::default();
    let mut buckets = HashMap::new();
    let mut current = None;

    for entry in entries {
        match entry {
            PlanEntry::DayStart { date, .. } => {
                let index = *buckets
                    .entry(*date)
                    .or_insert_with(|| itinerary.push_day(*date));
                current = Some(index);
            }
            PlanEntry::Activity(activity) => match current {
                Some(index) => itinerary.day_at_mut(index).push(activity.clone()),
                None => debug!(
                    time = %activity.time_label(),
                    activity = activity.activity(),
                    "dropping activity before first day"
                ),
            },
        }
    }

    itinerary
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::{date, time};

    use crate::{
        model::{ActivityEntry, Destination},
        plan::{SLOTS_PER_DAY, generate_plan},
    };

    fn paris() -> Destination {
        Destination::new("PAR", "Paris")
    }

    #[test]
    fn groups_generated_plan_into_days() {
        let plan = generate_plan(&paris(), date(2025, 4, 9), date(2025, 4, 10));
        assert_eq!(plan.len(), 12);

        let itinerary = group_by_day(&plan);
        let labels: Vec<&str> = itinerary.days().iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Wed Apr 09 2025", "Thu Apr 10 2025"]);

        for day in itinerary.days() {
            assert_eq!(day.activities().len(), SLOTS_PER_DAY);
            assert!(day.activities().iter().all(|a| a.activity().contains("Paris")));
        }
    }

    #[test]
    fn keys_follow_calendar_order() {
        let plan = generate_plan(&paris(), date(2025, 12, 28), date(2026, 1, 3));
        let itinerary = group_by_day(&plan);

        assert_eq!(itinerary.len(), 7);
        let dates: Vec<_> = itinerary.days().iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates[0], date(2025, 12, 28));
        assert_eq!(dates[6], date(2026, 1, 3));
    }

    #[test]
    fn regrouping_flattened_itinerary_is_stable() {
        let plan = generate_plan(&paris(), date(2025, 4, 9), date(2025, 4, 12));
        let once = group_by_day(&plan);
        let twice = group_by_day(&once.flatten());

        assert_eq!(once, twice);
        assert_eq!(once.flatten(), plan);
    }

    #[test]
    fn orphan_activity_is_dropped() {
        let orphan = PlanEntry::Activity(ActivityEntry::new(time(9, 0, 0, 0), "Breakfast"));
        let itinerary = group_by_day(&[orphan.clone()]);
        assert!(itinerary.is_empty());

        let mut plan = vec![orphan];
        plan.extend(generate_plan(&paris(), date(2025, 4, 9), date(2025, 4, 9)));
        let itinerary = group_by_day(&plan);
        assert_eq!(itinerary.len(), 1);
        assert_eq!(itinerary.days()[0].activities().len(), SLOTS_PER_DAY);
    }

    #[test]
    fn repeated_day_reopens_its_bucket() {
        let day = date(2025, 4, 9);
        let plan = [
            PlanEntry::DayStart { day: 1, date: day },
            PlanEntry::Activity(ActivityEntry::new(time(9, 0, 0, 0), "Breakfast")),
            PlanEntry::DayStart {
                day: 2,
                date: date(2025, 4, 10),
            },
            PlanEntry::Activity(ActivityEntry::new(time(9, 0, 0, 0), "Coffee")),
            PlanEntry::DayStart { day: 3, date: day },
            PlanEntry::Activity(ActivityEntry::new(time(19, 0, 0, 0), "Dinner")),
        ];

        let itinerary = group_by_day(&plan);
        assert_eq!(itinerary.len(), 2);
        let first: Vec<&str> = itinerary.days()[0]
            .activities()
            .iter()
            .map(ActivityEntry::activity)
            .collect();
        assert_eq!(first, ["Breakfast", "Dinner"]);
    }

    #[test]
    fn long_range_groups_every_day() {
        let plan = generate_plan(&paris(), date(2024, 1, 1), date(2026, 12, 31));
        let itinerary = group_by_day(&plan);

        assert_eq!(itinerary.len(), 366 + 365 + 365);
        assert!(itinerary
            .days()
            .iter()
            .all(|d| d.activities().len() == SLOTS_PER_DAY));
        assert_eq!(itinerary.days()[59].label, "Thu Feb 29 2024");
    }

    #[test]
    fn empty_plan_groups_to_empty_itinerary() {
        assert!(group_by_day(&[]).is_empty());
    }
}
