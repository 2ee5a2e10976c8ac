//! Plan generation: expand a date range into a day-by-day schedule.
//!
//! Every day of a trip gets the same five slots. The destination's name is
//! woven into each description so the plan reads as written for the place.

use jiff::{
    ToSpan,
    civil::{Date, Time, time},
};
use tracing::debug;

use crate::model::{ActivityEntry, Destination, PlanEntry};

/// One recurring slot in a day's schedule.
struct Slot {
    at: Time,
    describe: fn(&str) -> String,
}

const DAILY_SLOTS: [Slot; 5] = [
    Slot {
        at: time(9, 0, 0, 0),
        describe: |place| format!("Breakfast in {place}"),
    },
    Slot {
        at: time(11, 0, 0, 0),
        describe: |place| format!("Visit the main attraction of {place}"),
    },
    Slot {
        at: time(14, 0, 0, 0),
        describe: |place| format!("Lunch at a local restaurant in {place}"),
    },
    Slot {
        at: time(16, 0, 0, 0),
        describe: |place| format!("Explore hidden gems of {place}"),
    },
    Slot {
        at: time(19, 0, 0, 0),
        describe: |place| format!("Dinner and nightlife in {place}"),
    },
];

/// Number of activities scheduled on every day of a trip.
pub const SLOTS_PER_DAY: usize = DAILY_SLOTS.len();

/// Generate the flat plan for every calendar day in `from..=to`.
///
/// Each day contributes a [`PlanEntry::DayStart`] followed by its five
/// activities, days in ascending order. The range is not validated here:
/// if `from` is after `to` the plan is empty. Use
/// [`TripRequest`](crate::model::TripRequest) to reject that up front.
pub fn generate_plan(destination: &Destination, from: Date, to: Date) -> Vec<PlanEntry> {
    let mut entries = Vec::new();

    for (day, date) in (1..).zip(from.series(1.day()).take_while(|d| *d <= to)) {
        entries.push(PlanEntry::DayStart { day, date });
        entries.extend(DAILY_SLOTS.iter().map(|slot| {
            PlanEntry::Activity(ActivityEntry::new(slot.at, (slot.describe)(&destination.name)))
        }));
    }

    debug!(
        destination = %destination.code,
        %from,
        %to,
        entries = entries.len(),
        "generated plan"
    );
    entries
}
