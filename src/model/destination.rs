//! Destinations: the fixed catalogue a trip can be planned for.

use std::fmt;

use serde::Serialize;

use crate::error::PlanError;

/// A place a trip can be planned for.
///
/// The code is an opaque token; the name is what gets interpolated
/// into activity descriptions and printed on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub code: String,
    pub name: String,
}

/// Every destination the planner knows about, as `(code, name)`.
pub const CATALOGUE: &[(&str, &str)] = &[
    ("PAR", "Paris"),
    ("NYC", "New York"),
    ("TOK", "Tokyo"),
    ("LDN", "London"),
];

impl Destination {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// All catalogue destinations, in catalogue order.
    pub fn all() -> Vec<Self> {
        CATALOGUE
            .iter()
            .map(|(code, name)| Self::new(*code, *name))
            .collect()
    }

    /// Look up a catalogue destination by code or name, ignoring case.
    pub fn lookup(reference: &str) -> Result<Self, PlanError> {
        let reference = reference.trim();
        CATALOGUE
            .iter()
            .find(|(code, name)| {
                code.eq_ignore_ascii_case(reference) || name.eq_ignore_ascii_case(reference)
            })
            .map(|(code, name)| Self::new(*code, *name))
            .ok_or_else(|| PlanError::UnknownDestination(reference.to_string()))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
