//! Wayfare: day-by-day trip itineraries.
//!
//! A trip flows one way through the crate:
//!
//! 1. [`model::TripRequest`] validates where, when, and how many.
//! 2. [`plan::generate_plan`] expands the date range into a flat plan.
//! 3. [`group::group_by_day`] folds the flat plan into an [`model::Itinerary`].
//! 4. [`view::ItineraryView`] holds the itinerary while it is read and edited.
//! 5. [`export::export_document`] lays it out on pages.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod group;
pub mod model;
pub mod plan;
pub mod view;
