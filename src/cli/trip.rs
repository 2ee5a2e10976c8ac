//! Trip commands: destinations, plan, export.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::{
    config::Config,
    model::{Destination, Itinerary, PlannedTrip, TripRequest, TripSummary},
    view::ItineraryView,
};

use super::{TripArgs, format::format_itinerary};

/// A `--edit DAY:SLOT=TEXT` override, with DAY and SLOT counted from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArg {
    day: usize,
    slot: usize,
    text: String,
}

impl FromStr for EditArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, text) = s
            .split_once('=')
            .ok_or_else(|| format!("expected DAY:SLOT=TEXT, got '{s}'"))?;
        let (day, slot) = target
            .split_once(':')
            .ok_or_else(|| format!("expected DAY:SLOT before '=', got '{target}'"))?;
        let day = parse_position("day", day)?;
        let slot = parse_position("slot", slot)?;
        Ok(Self {
            day,
            slot,
            text: text.to_string(),
        })
    }
}

fn parse_position(what: &str, value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("{what} must be a number from 1, got '{value}'")),
        Ok(n) => Ok(n),
    }
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    summary: &'a TripSummary,
    itinerary: &'a Itinerary,
}

pub(super) fn cmd_destinations() {
    for destination in Destination::all() {
        println!("{}  {}", destination.code, destination.name);
    }
}

pub(super) fn cmd_plan(config: &Config, args: &TripArgs, json: bool) -> Result<(), String> {
    let view = open_view(config, args)?;

    if json {
        println!("{}", plan_json(&view)?);
    } else {
        print!("{}", format_itinerary(view.summary(), view.itinerary()));
    }

    Ok(())
}

pub(super) fn cmd_export(
    config: &Config,
    args: &TripArgs,
    edits: &[EditArg],
    out: Option<&Path>,
) -> Result<(), String> {
    let mut view = open_view(config, args)?;
    apply_edits(&mut view, edits)?;

    let path = out.unwrap_or(&config.output);
    view.export(&config.page)
        .save(path)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    println!("{}", path.display());
    Ok(())
}

/// The `plan --json` document: trip summary plus grouped days.
fn plan_json(view: &ItineraryView) -> Result<String, String> {
    let output = PlanOutput {
        summary: view.summary(),
        itinerary: view.itinerary(),
    };
    serde_json::to_string_pretty(&output)
        .map_err(|e| format!("failed to serialize itinerary: {e}"))
}

/// Validate the trip arguments, plan the trip, and open a view on it.
fn open_view(config: &Config, args: &TripArgs) -> Result<ItineraryView, String> {
    let planned = plan_trip(config, args).map_err(|e| e.to_string())?;
    ItineraryView::open(Some(planned)).map_err(|e| e.to_string())
}

fn plan_trip(config: &Config, args: &TripArgs) -> crate::error::Result<PlannedTrip> {
    let destination = Destination::lookup(&args.destination)?;
    let travelers = args.travelers.unwrap_or(config.default_travelers);
    let request = TripRequest::new(destination, args.from, args.to, travelers)?;
    Ok(request.plan())
}

/// Apply `--edit` overrides in order, opening each day for editing as needed.
fn apply_edits(view: &mut ItineraryView, edits: &[EditArg]) -> Result<(), String> {
    for edit in edits {
        let label = view
            .itinerary()
            .nth_day(edit.day)
            .map(|d| d.label.clone())
            .ok_or_else(|| {
                format!(
                    "day {} is outside the trip ({} days)",
                    edit.day,
                    view.itinerary().len()
                )
            })?;
        if !view.is_editing(&label) {
            view.toggle_edit(&label).map_err(|e| e.to_string())?;
        }
        view.set_activity(&label, edit.slot - 1, edit.text.clone())
            .map_err(|e| format!("edit {}:{}: {e}", edit.day, edit.slot))?;
    }
    Ok(())
}
