//! Flat-plan entries: day boundaries and the activities between them.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

/// One element of a flat plan.
///
/// A flat plan is a chronological run of `DayStart` markers, each
/// followed by the activities belonging to that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entry", rename_all = "camelCase")]
pub enum PlanEntry {
    /// Marks the start of a calendar day.
    DayStart {
        /// 1-based position of the day within the trip.
        day: u32,
        date: Date,
    },

    /// A scheduled activity within the current day.
    Activity(ActivityEntry),
}

impl PlanEntry {
    /// The banner shown for a day boundary, e.g. `--- Day 1 ---`.
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::DayStart { day, .. } => Some(format!("--- Day {day} ---")),
            Self::Activity(_) => None,
        }
    }

    /// The label a boundary groups under, e.g. `Wed Apr 09 2025`.
    pub fn day_label(&self) -> Option<String> {
        match self {
            Self::DayStart { date, .. } => Some(day_label(*date)),
            Self::Activity(_) => None,
        }
    }
}

/// A single line item: when, and what.
///
/// The time is fixed once generated. Only the description can change,
/// through [`Itinerary::update_activity`](super::Itinerary::update_activity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    time: Time,
    activity: String,
}

impl ActivityEntry {
    pub fn new(time: Time, activity: impl Into<String>) -> Self {
        Self {
            time,
            activity: activity.into(),
        }
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// The time as shown to travelers, e.g. `9:00 AM`.
    pub fn time_label(&self) -> String {
        time_label(self.time)
    }

    pub(super) fn set_activity(&mut self, text: String) {
        self.activity = text;
    }
}

/// Format a date the way day headers show it: `Wed Apr 09 2025`.
pub fn day_label(date: Date) -> String {
    date.strftime("%a %b %d %Y").to_string()
}

/// Format a clock time on a 12-hour dial: `9:00 AM`, `2:00 PM`.
pub fn time_label(time: Time) -> String {
    time.strftime("%-I:%M %p").to_string()
}
