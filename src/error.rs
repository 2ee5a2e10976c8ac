//! Errors raised by the itinerary pipeline.

use jiff::civil::Date;

/// Errors that can occur while planning, viewing, or editing a trip.
///
/// None of these are fatal to the process; the CLI reports them and exits.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("unknown destination: {0}")]
    UnknownDestination(String),

    #[error("from date {from} is after to date {to}")]
    InvalidDateRange { from: Date, to: Date },

    #[error("at least one traveler is required")]
    NoTravelers,

    #[error("no itinerary to show: plan a trip first")]
    MissingItinerary,

    #[error("no day labelled '{0}' in this itinerary")]
    DayNotFound(String),

    #[error("day '{day}' has {len} activities, no activity at index {index}")]
    ActivityOutOfRange {
        day: String,
        index: usize,
        len: usize,
    },

    #[error("day '{0}' is not being edited")]
    NotEditing(String),
}

pub type Result<T> = core::result::Result<T, PlanError>;
