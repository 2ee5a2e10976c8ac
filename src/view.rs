//! The itinerary view: a grouped plan the traveler can read and edit.
//!
//! A view owns all of its state. Nothing here is shared between views,
//! and dropping the view discards every edit that wasn't exported.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{PlanError, Result},
    export::{Document, PageGeometry, export_document},
    group::group_by_day,
    model::{Itinerary, PlannedTrip, TripSummary},
};

/// Per-view state: the trip, its grouped plan, and which days are open for editing.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    summary: TripSummary,
    itinerary: Itinerary,
    editing: HashMap<String, bool>,
}

impl ItineraryView {
    /// Open a view on a freshly planned trip.
    ///
    /// A view can't be opened without a plan: `None` is rejected rather
    /// than shown as an empty itinerary.
    pub fn open(planned: Option<PlannedTrip>) -> Result<Self> {
        let planned = planned.ok_or(PlanError::MissingItinerary)?;
        let itinerary = group_by_day(&planned.entries);
        debug!(days = itinerary.len(), "opened itinerary view");
        Ok(Self {
            summary: planned.summary,
            itinerary,
            editing: HashMap::new(),
        })
    }

    pub fn summary(&self) -> &TripSummary {
        &self.summary
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Whether a day is currently shown in edit mode.
    pub fn is_editing(&self, label: &str) -> bool {
        self.editing.get(label).copied().unwrap_or(false)
    }

    /// Flip a day between reading and editing. Returns the new state.
    pub fn toggle_edit(&mut self, label: &str) -> Result<bool> {
        if self.itinerary.day(label).is_none() {
            return Err(PlanError::DayNotFound(label.to_string()));
        }
        let flag = self.editing.entry(label.to_string()).or_default();
        *flag = !*flag;
        Ok(*flag)
    }

    /// Replace the text of activity `index` on day `label`.
    ///
    /// The day must be in edit mode.
    pub fn set_activity(
        &mut self,
        label: &str,
        index: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        if self.itinerary.day(label).is_none() {
            return Err(PlanError::DayNotFound(label.to_string()));
        }
        if !self.is_editing(label) {
            return Err(PlanError::NotEditing(label.to_string()));
        }
        self.itinerary.update_activity(label, index, text)
    }

    /// Render the current state of the itinerary, edits included.
    pub fn export(&self, geometry: &PageGeometry) -> Document {
        export_document(&self.summary, &self.itinerary, geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::{Destination, TripRequest};

    const WED: &str = "Wed Apr 09 2025";
    const THU: &str = "Thu Apr 10 2025";

    fn paris_view() -> ItineraryView {
        let planned = TripRequest::new(
            Destination::new("PAR", "Paris"),
            date(2025, 4, 9),
            date(2025, 4, 10),
            2,
        )
        .unwrap()
        .plan();
        ItineraryView::open(Some(planned)).unwrap()
    }

    #[test]
    fn open_without_plan_fails() {
        let err = ItineraryView::open(None).unwrap_err();
        assert!(matches!(err, PlanError::MissingItinerary));
    }

    #[test]
    fn toggles_are_independent_per_day() {
        let mut view = paris_view();
        assert!(!view.is_editing(WED));

        assert!(view.toggle_edit(WED).unwrap());
        assert!(view.is_editing(WED));
        assert!(!view.is_editing(THU));

        assert!(!view.toggle_edit(WED).unwrap());
        assert!(!view.is_editing(WED));
    }

    #[test]
    fn toggle_unknown_day_fails() {
        let mut view = paris_view();
        let err = view.toggle_edit("Fri Apr 11 2025").unwrap_err();
        assert!(matches!(err, PlanError::DayNotFound(_)));
    }

    #[test]
    fn edit_changes_only_the_target_entry() {
        let mut view = paris_view();
        let before = view.itinerary().clone();

        view.toggle_edit(WED).unwrap();
        view.set_activity(WED, 2, "Picnic by the Seine").unwrap();

        let after = view.itinerary();
        let day = after.day(WED).unwrap();
        assert_eq!(day.activities()[2].activity(), "Picnic by the Seine");

        for (old, new) in before.days().iter().zip(after.days()) {
            assert_eq!(old.label, new.label);
            assert_eq!(old.activities().len(), new.activities().len());
            for (i, (a, b)) in old.activities().iter().zip(new.activities()).enumerate() {
                assert_eq!(a.time(), b.time());
                if !(old.label == WED && i == 2) {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn last_write_wins() {
        let mut view = paris_view();
        view.toggle_edit(THU).unwrap();
        view.set_activity(THU, 0, "Croissant").unwrap();
        view.set_activity(THU, 0, "").unwrap();

        assert_eq!(view.itinerary().day(THU).unwrap().activities()[0].activity(), "");
    }

    #[test]
    fn edit_requires_edit_mode() {
        let mut view = paris_view();
        let err = view.set_activity(WED, 0, "Croissant").unwrap_err();
        assert!(matches!(err, PlanError::NotEditing(_)));

        view.toggle_edit(WED).unwrap();
        view.toggle_edit(WED).unwrap();
        let err = view.set_activity(WED, 0, "Croissant").unwrap_err();
        assert!(matches!(err, PlanError::NotEditing(_)));
    }

    #[test]
    fn edit_out_of_range_fails() {
        let mut view = paris_view();
        view.toggle_edit(WED).unwrap();
        let err = view.set_activity(WED, 5, "x").unwrap_err();
        assert!(matches!(err, PlanError::ActivityOutOfRange { len: 5, .. }));
    }

    #[test]
    fn export_reflects_edits() {
        let mut view = paris_view();
        view.toggle_edit(THU).unwrap();
        view.set_activity(THU, 4, "Opera").unwrap();

        let doc = view.export(&PageGeometry::default());
        let text = String::from_utf8(doc.to_bytes()).unwrap();
        assert!(text.contains("7:00 PM — Opera\n"));
        assert!(text.contains("7:00 PM — Dinner and nightlife in Paris\n"));
    }
}
