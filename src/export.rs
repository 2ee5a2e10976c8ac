//! Document export: lay an itinerary out on fixed-height pages.
//!
//! Layout works in abstract vertical units. A cursor starts at the top
//! margin and moves down one line height per line; once it has passed the
//! page threshold the next line opens a new page.
//!
//! ```text
//!  10  Trip Itinerary
//!  20  Destination: Paris
//!  ..  From / To / Travelers
//!  65  --- Day 1 - Wed Apr 09 2025 ---
//!  75  9:00 AM — Breakfast in Paris
//! ```

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{Itinerary, TripSummary, day_label};

/// File name used when no output path is configured.
pub const DEFAULT_FILE_NAME: &str = "trip-itinerary.txt";

const TITLE: &str = "Trip Itinerary";
const PLACEHOLDER: &str = "(not set)";
const PAGE_BREAK: char = '\x0C';

/// Vertical page layout, in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageGeometry {
    /// Where the first line of every page sits.
    pub top_margin: u32,

    /// How far the cursor advances per line.
    pub line_height: u32,

    /// A cursor past this point forces a page break before the next line.
    pub threshold: u32,

    /// Extra space between the trip metadata and the first day.
    pub section_gap: u32,
}

impl PageGeometry {
    /// Check that a page holds at least one line and the cursor stays in range.
    pub fn validate(&self) -> Result<(), String> {
        if self.line_height == 0 {
            return Err("line-height must be at least 1".to_string());
        }
        if self.threshold < self.top_margin {
            return Err(format!(
                "threshold ({}) must not be above top-margin ({})",
                self.threshold, self.top_margin
            ));
        }
        let bottom = self
            .threshold
            .checked_add(self.line_height)
            .and_then(|y| y.checked_add(self.section_gap));
        if bottom.is_none() {
            return Err("threshold, line-height and section-gap are too large".to_string());
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            top_margin: 10,
            line_height: 10,
            threshold: 270,
            section_gap: 5,
        }
    }
}

/// A line of text placed on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub y: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<Line>,
}

/// A rendered itinerary: write-once, detached from the plan it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Plain text, one line per row, pages separated by a form feed.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_BREAK);
            }
            for line in &page.lines {
                out.push_str(&line.text);
                out.push('\n');
            }
        }
        out.into_bytes()
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_bytes())?;
        info!(path = %path.display(), pages = self.pages.len(), "exported itinerary");
        Ok(())
    }
}

/// Tracks the vertical cursor and breaks pages as lines are added.
struct Pager {
    geometry: PageGeometry,
    done: Vec<Page>,
    current: Page,
    y: u32,
}

impl Pager {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            done: Vec::new(),
            current: Page::default(),
            y: geometry.top_margin,
        }
    }

    fn line(&mut self, text: String) {
        if self.y > self.geometry.threshold && !self.current.lines.is_empty() {
            self.done.push(std::mem::take(&mut self.current));
            self.y = self.geometry.top_margin;
            debug!(page = self.done.len() + 1, "page break");
        }
        self.current.lines.push(Line { y: self.y, text });
        self.y = self.y.saturating_add(self.geometry.line_height);
    }

    fn gap(&mut self, units: u32) {
        self.y = self.y.saturating_add(units);
    }

    fn finish(mut self) -> Document {
        self.done.push(self.current);
        Document { pages: self.done }
    }
}

/// Render trip metadata and an itinerary into a paginated document.
///
/// Never fails: missing metadata is printed as a placeholder.
pub fn export_document(
    summary: &TripSummary,
    itinerary: &Itinerary,
    geometry: &PageGeometry,
) -> Document {
    let mut pager = Pager::new(*geometry);

    pager.line(TITLE.to_string());
    pager.line(format!(
        "Destination: {}",
        or_placeholder(summary.destination.as_ref().map(|d| d.name.clone()))
    ));
    pager.line(format!("From: {}", or_placeholder(summary.from.map(day_label))));
    pager.line(format!("To: {}", or_placeholder(summary.to.map(day_label))));
    pager.line(format!(
        "Travelers: {}",
        or_placeholder(summary.travelers.map(|n| n.to_string()))
    ));
    pager.gap(geometry.section_gap);

    for (n, day) in (1..).zip(itinerary.days()) {
        pager.line(format!("--- Day {n} - {} ---", day.label));
        for activity in day.activities() {
            pager.line(format!("{} — {}", activity.time_label(), activity.activity()));
        }
    }

    pager.finish()
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}
