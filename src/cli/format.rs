//! Output formatting for CLI display.

use crate::model::{Itinerary, TripSummary, day_label};

/// Format a trip summary and its itinerary for the terminal.
pub(super) fn format_itinerary(summary: &TripSummary, itinerary: &Itinerary) -> String {
    let destination = summary.destination.as_ref().map_or("-", |d| d.name.as_str());
    let from = summary.from.map_or_else(|| "-".to_string(), day_label);
    let to = summary.to.map_or_else(|| "-".to_string(), day_label);
    let travelers = summary
        .travelers
        .map_or_else(|| "-".to_string(), |n| n.to_string());

    let mut lines = vec![
        format!("Destination: {destination}"),
        format!("From:        {from}"),
        format!("To:          {to}"),
        format!("Travelers:   {travelers}"),
    ];

    for (n, day) in (1..).zip(itinerary.days()) {
        lines.push(String::new());
        lines.push(format!("Day {n} - {}", day.label));
        lines.extend((1..).zip(day.activities()).map(|(slot, activity)| {
            format!(
                "  {n}:{slot}  {:>8}  {}",
                activity.time_label(),
                activity.activity()
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
