//! Trip requests and the metadata carried alongside a plan.

use jiff::civil::Date;
use serde::Serialize;

use crate::error::{PlanError, Result};

use super::{destination::Destination, entry::PlanEntry};

/// What the traveler asked for: where, when, and how many.
///
/// Only constructed through [`TripRequest::new`], so a request in hand
/// always has `from <= to` and at least one traveler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    destination: Destination,
    from: Date,
    to: Date,
    travelers: u32,
}

impl TripRequest {
    pub fn new(destination: Destination, from: Date, to: Date, travelers: u32) -> Result<Self> {
        if from > to {
            return Err(PlanError::InvalidDateRange { from, to });
        }
        if travelers == 0 {
            return Err(PlanError::NoTravelers);
        }
        Ok(Self {
            destination,
            from,
            to,
            travelers,
        })
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn from(&self) -> Date {
        self.from
    }

    pub fn to(&self) -> Date {
        self.to
    }

    pub fn travelers(&self) -> u32 {
        self.travelers
    }

    /// Generate the flat plan and hand it over with the trip's metadata.
    ///
    /// Consumes the request: a request is planned exactly once.
    pub fn plan(self) -> PlannedTrip {
        let entries = crate::plan::generate_plan(&self.destination, self.from, self.to);
        PlannedTrip {
            summary: TripSummary {
                destination: Some(self.destination),
                from: Some(self.from),
                to: Some(self.to),
                travelers: Some(self.travelers),
            },
            entries,
        }
    }
}

/// Trip metadata printed at the top of an itinerary.
///
/// Every field is optional; missing ones render as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TripSummary {
    pub destination: Option<Destination>,
    pub from: Option<Date>,
    pub to: Option<Date>,
    pub travelers: Option<u32>,
}

/// A freshly generated flat plan, together with the trip it was planned for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTrip {
    pub summary: TripSummary,
    pub entries: Vec<PlanEntry>,
}
