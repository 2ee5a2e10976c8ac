//! The grouped plan: activities bucketed per calendar day.

use jiff::civil::Date;
use serde::Serialize;

use crate::error::{PlanError, Result};

use super::entry::{ActivityEntry, PlanEntry, day_label};

/// The activities planned for one calendar day, in schedule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub date: Date,

    /// The formatted date this day is keyed by, e.g. `Wed Apr 09 2025`.
    pub label: String,

    activities: Vec<ActivityEntry>,
}

impl DayPlan {
    pub fn new(date: Date) -> Self {
        Self {
            date,
            label: day_label(date),
            activities: Vec::new(),
        }
    }

    pub fn activities(&self) -> &[ActivityEntry] {
        &self.activities
    }

    pub(crate) fn push(&mut self, entry: ActivityEntry) {
        self.activities.push(entry);
    }
}

/// A grouped plan, with days in the order they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    days: Vec<DayPlan>,
}

impl Itinerary {
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Find a day by its label.
    pub fn day(&self, label: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.label == label)
    }

    /// The day at a 1-based position, as printed on the itinerary.
    pub fn nth_day(&self, day: usize) -> Option<&DayPlan> {
        day.checked_sub(1).and_then(|i| self.days.get(i))
    }

    /// Append an empty bucket for `date` and return its index.
    ///
    /// Callers track which dates already have a bucket.
    pub(crate) fn push_day(&mut self, date: Date) -> usize {
        self.days.push(DayPlan::new(date));
        self.days.len() - 1
    }

    /// The bucket at `index`, as returned by [`push_day`](Self::push_day).
    pub(crate) fn day_at_mut(&mut self, index: usize) -> &mut DayPlan {
        &mut self.days[index]
    }

    /// Replace the description of one activity.
    ///
    /// This is the only way an itinerary changes after grouping.
    /// The activity's time and every other entry stay as they were.
    pub fn update_activity(
        &mut self,
        label: &str,
        index: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        let day = self
            .days
            .iter_mut()
            .find(|d| d.label == label)
            .ok_or_else(|| PlanError::DayNotFound(label.to_string()))?;
        let len = day.activities.len();
        let entry = day
            .activities
            .get_mut(index)
            .ok_or_else(|| PlanError::ActivityOutOfRange {
                day: label.to_string(),
                index,
                len,
            })?;
        entry.set_activity(text.into());
        Ok(())
    }

    /// Lay the itinerary back out as a flat plan, renumbering days from 1.
    pub fn flatten(&self) -> Vec<PlanEntry> {
        let capacity = self.days.iter().map(|d| d.activities.len() + 1).sum();
        let mut entries = Vec::with_capacity(capacity);
        for (day, plan) in (1..).zip(&self.days) {
            entries.push(PlanEntry::DayStart {
                day,
                date: plan.date,
            });
            entries.extend(plan.activities.iter().cloned().map(PlanEntry::Activity));
        }
        entries
    }
}
