//! Filter zones, recorded filter sets, and filter value normalization.
//!
//! A filter session is built from a series of include/exclude registrations,
//! each naming a zone (the message attribute the predicate examines) and a
//! set of values. This module holds the pieces the hub assembles: the closed
//! zone enumeration, the normalized argument type, and the bookkeeping
//! structure that records what was registered during a session.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::Message;

/// The message attribute a filter predicate examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterZone {
    /// Filter on the message's `area` attribute.
    Area,
    /// Filter on the message's `type` attribute.
    Type,
}

impl FilterZone {
    /// Typed accessor for the zone's attribute on a message.
    pub fn value<'a>(&self, message: &'a Message) -> &'a str {
        match self {
            FilterZone::Area => &message.area,
            FilterZone::Type => &message.kind,
        }
    }
}

/// Whether a filter keeps matching messages or drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterDirection {
    Include,
    Exclude,
}

/// A normalized filter argument: a single value or a collection of values,
/// always held as a set.
///
/// The `where_*` builder methods accept `impl Into<FilterValues>`, so callers
/// can pass a bare `&str`, a `String`, a `Vec`, a slice, or an array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterValues(BTreeSet<String>);

impl FilterValues {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for FilterValues {
    fn from(value: &str) -> Self {
        Self(BTreeSet::from([value.to_string()]))
    }
}

impl From<String> for FilterValues {
    fn from(value: String) -> Self {
        Self(BTreeSet::from([value]))
    }
}

impl From<&String> for FilterValues {
    fn from(value: &String) -> Self {
        Self(BTreeSet::from([value.clone()]))
    }
}

impl From<Vec<String>> for FilterValues {
    fn from(values: Vec<String>) -> Self {
        Self(values.into_iter().collect())
    }
}

impl From<Vec<&str>> for FilterValues {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FilterValues {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FilterValues {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<BTreeSet<String>> for FilterValues {
    fn from(values: BTreeSet<String>) -> Self {
        Self(values)
    }
}

/// The filters recorded during the current query session.
///
/// Values accumulate by set union per zone and direction; the working-list
/// narrowing performed by the hub uses only each call's own values, so this
/// structure is bookkeeping, not the narrowing predicate.
#[derive(Debug, Default)]
pub struct FilterSet {
    recorded: BTreeMap<(FilterDirection, FilterZone), BTreeSet<String>>,
}

impl FilterSet {
    /// True when no filter has been recorded since the last `clear`.
    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }

    /// Unions `values` into the set recorded for the zone and direction.
    pub fn record(&mut self, direction: FilterDirection, zone: FilterZone, values: &FilterValues) {
        self.recorded
            .entry((direction, zone))
            .or_default()
            .extend(values.iter().map(str::to_string));
    }

    /// The accumulated values for a zone and direction, if any were recorded.
    pub fn recorded(&self, direction: FilterDirection, zone: FilterZone) -> Option<&BTreeSet<String>> {
        self.recorded.get(&(direction, zone))
    }

    /// Ends the session by dropping all recorded filters.
    pub fn clear(&mut self) {
        self.recorded.clear();
    }
}
