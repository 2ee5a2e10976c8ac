//! Core data model for trip planning.
//!
//! These types follow a trip through the pipeline: a request is planned
//! into flat entries, grouped into an itinerary, and exported.

mod destination;
mod entry;
mod itinerary;
mod trip;

pub use destination::{CATALOGUE, Destination};
pub use entry::{ActivityEntry, PlanEntry, day_label, time_label};
pub use itinerary::{DayPlan, Itinerary};
pub use trip::{PlannedTrip, TripRequest, TripSummary};
