//! The alert hub: notifier registry, default notifier, and the fluent
//! filter session.
//!
//! `AlertHub` mediates between filter-builder calls and notifier backends.
//! Filters accumulate across chained `where_*` calls until the terminal
//! `get()`, which returns the surviving messages and resets the session.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::core::{Message, Notifier};
use crate::filters::{FilterDirection, FilterSet, FilterValues, FilterZone};
use crate::notifiers::MemoryNotifier;

/// Errors surfaced when forwarding a message to the default notifier.
///
/// Forwarding is validated lazily: setting a default notifier never checks
/// registration, so both variants are detected at the point of delivery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    #[error("no default notifier has been set")]
    NoDefaultNotifier,
    #[error("notifier `{0}` is not registered")]
    UnknownNotifier(String),
}

/// The central coordinator for notifier backends and message filtering.
///
/// The registry is keyed by each notifier's self-reported name; iteration
/// order (and therefore seeding order) is name order. A filter session moves
/// between two states: idle (no filters recorded) and filtering. The first
/// `where_*` call of a session seeds the working list from every registered
/// notifier; subsequent calls narrow it; `get()` returns the result and
/// resets to idle.
#[derive(Default)]
pub struct AlertHub {
    notifiers: BTreeMap<String, Box<dyn Notifier>>,
    default_notifier: Option<String>,
    filters: FilterSet,
    filtered: Vec<Message>,
}

impl AlertHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hub from configuration: one in-memory notifier per configured
    /// entry, plus the configured default notifier name.
    pub fn from_config(config: &Config) -> Self {
        let mut hub = Self::new();
        for notifier in &config.notifiers {
            hub.add_notifier(Box::new(MemoryNotifier::new(&notifier.name)));
        }
        if let Some(name) = &config.default_notifier {
            hub.set_default_notifier(name.clone());
        }
        hub
    }

    // ------------------------------------------------------------------
    // Notifier management
    // ------------------------------------------------------------------

    /// Registers a notifier under its self-reported name. A later
    /// registration under the same name silently replaces the earlier one.
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) -> &mut Self {
        let name = notifier.name().to_string();
        debug!(notifier = %name, "registering notifier");
        self.notifiers.insert(name, notifier);
        self
    }

    /// Deregisters a notifier by name. Removing an unknown name is a no-op.
    pub fn remove_notifier(&mut self, name: &str) -> &mut Self {
        self.notifiers.remove(name);
        self
    }

    /// A read-only view of the registry, in name order. Callers cannot
    /// mutate the registry through this view.
    pub fn notifiers(&self) -> impl Iterator<Item = (&str, &dyn Notifier)> {
        self.notifiers
            .iter()
            .map(|(name, notifier)| (name.as_str(), notifier.as_ref()))
    }

    /// Looks up a notifier by name. Never fails; an unknown name yields
    /// `None`, letting the caller supply its own fallback.
    pub fn notifier(&self, name: &str) -> Option<&dyn Notifier> {
        self.notifiers.get(name).map(|notifier| notifier.as_ref())
    }

    /// Mutable lookup, for delivering messages to a specific backend.
    pub fn notifier_mut(&mut self, name: &str) -> Option<&mut (dyn Notifier + '_)> {
        // `&mut dyn Notifier` is invariant in the trait-object lifetime, so
        // the unsize coercion needs an explicit coercion site.
        match self.notifiers.get_mut(name) {
            Some(notifier) => Some(notifier.as_mut()),
            None => None,
        }
    }

    pub fn default_notifier(&self) -> Option<&str> {
        self.default_notifier.as_deref()
    }

    /// Names the notifier that receives forwarded messages. The name is not
    /// checked against the registry until a forwarded delivery is attempted.
    pub fn set_default_notifier(&mut self, name: impl Into<String>) -> &mut Self {
        self.default_notifier = Some(name.into());
        self
    }

    // ------------------------------------------------------------------
    // Forwarding
    // ------------------------------------------------------------------

    /// Delivers a message to the default notifier.
    pub fn notify(&mut self, message: Message) -> Result<(), AlertError> {
        let name = self
            .default_notifier
            .as_deref()
            .ok_or(AlertError::NoDefaultNotifier)?;
        let notifier = self
            .notifiers
            .get_mut(name)
            .ok_or_else(|| AlertError::UnknownNotifier(name.to_string()))?;
        notifier.notify(message);
        Ok(())
    }

    /// Records a success message on the default notifier.
    pub fn success(&mut self, area: &str, body: &str) -> Result<(), AlertError> {
        self.notify(Message::new(area, "success", body))
    }

    /// Records an error message on the default notifier.
    pub fn error(&mut self, area: &str, body: &str) -> Result<(), AlertError> {
        self.notify(Message::new(area, "error", body))
    }

    /// Records a warning message on the default notifier.
    pub fn warning(&mut self, area: &str, body: &str) -> Result<(), AlertError> {
        self.notify(Message::new(area, "warning", body))
    }

    /// Records an info message on the default notifier.
    pub fn info(&mut self, area: &str, body: &str) -> Result<(), AlertError> {
        self.notify(Message::new(area, "info", body))
    }

    // ------------------------------------------------------------------
    // Fluent filtering
    // ------------------------------------------------------------------

    /// Keeps only messages whose area is among the given values.
    pub fn where_area(&mut self, areas: impl Into<FilterValues>) -> &mut Self {
        self.register_filter(Some(FilterZone::Area), areas.into(), FilterDirection::Include);
        self
    }

    /// Drops messages whose area is among the given values.
    pub fn where_not_area(&mut self, areas: impl Into<FilterValues>) -> &mut Self {
        self.register_filter(Some(FilterZone::Area), areas.into(), FilterDirection::Exclude);
        self
    }

    /// Keeps only messages whose type is among the given values.
    pub fn where_type(&mut self, kinds: impl Into<FilterValues>) -> &mut Self {
        self.register_filter(Some(FilterZone::Type), kinds.into(), FilterDirection::Include);
        self
    }

    /// Drops messages whose type is among the given values.
    pub fn where_not_type(&mut self, kinds: impl Into<FilterValues>) -> &mut Self {
        self.register_filter(Some(FilterZone::Type), kinds.into(), FilterDirection::Exclude);
        self
    }

    /// Terminal operation: returns the messages surviving the session's
    /// filters and resets the session. With no filters registered, a no-op
    /// filter is applied first, so the result is every accumulated message
    /// across all notifiers.
    pub fn get(&mut self) -> Vec<Message> {
        if self.filters.is_empty() {
            self.register_filter(None, FilterValues::default(), FilterDirection::Include);
        }

        let result = std::mem::take(&mut self.filtered);
        self.filters.clear();
        debug!(messages = result.len(), "filter session retrieved");
        result
    }

    /// The shared registration path behind the `where_*` builders and the
    /// no-op filter `get()` applies to an idle session.
    ///
    /// The first registration of a session seeds the working list with every
    /// message from every notifier. Each registration with a non-empty value
    /// set then records the values (union per zone and direction) and narrows
    /// the working list using only its own values, so chained calls compose
    /// as a left-to-right logical AND.
    fn register_filter(
        &mut self,
        zone: Option<FilterZone>,
        values: FilterValues,
        direction: FilterDirection,
    ) {
        if self.filters.is_empty() {
            for notifier in self.notifiers.values() {
                self.filtered.extend(notifier.all());
            }
            debug!(seeded = self.filtered.len(), "filter session seeded");
        }

        let Some(zone) = zone else {
            return;
        };
        if values.is_empty() {
            return;
        }

        self.filters.record(direction, zone, &values);
        self.filtered.retain(|message| {
            let hit = values.contains(zone.value(message));
            match direction {
                FilterDirection::Include => hit,
                FilterDirection::Exclude => !hit,
            }
        });
        debug!(?zone, ?direction, remaining = self.filtered.len(), "filter applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterDirection, FilterZone};

    fn notifier_with(name: &str, messages: &[(&str, &str)]) -> Box<MemoryNotifier> {
        let mut notifier = MemoryNotifier::new(name);
        for (area, kind) in messages {
            notifier.notify(Message::new(*area, *kind, "test"));
        }
        Box::new(notifier)
    }

    #[test]
    fn repeated_same_zone_calls_record_the_union_but_narrow_incrementally() {
        let mut hub = AlertHub::new();
        hub.add_notifier(notifier_with(
            "flash",
            &[("admin", "error"), ("shop", "error")],
        ));

        hub.where_area("admin").where_area("shop");

        // Bookkeeping holds both values...
        let recorded = hub
            .filters
            .recorded(FilterDirection::Include, FilterZone::Area)
            .unwrap();
        assert!(recorded.contains("admin") && recorded.contains("shop"));

        // ...but the second call narrowed the admin-only list with "shop",
        // leaving nothing.
        assert!(hub.get().is_empty());
    }

    #[test]
    fn get_resets_recorded_filters() {
        let mut hub = AlertHub::new();
        hub.add_notifier(notifier_with("flash", &[("admin", "error")]));

        hub.where_area("admin");
        assert!(!hub.filters.is_empty());

        hub.get();
        assert!(hub.filters.is_empty());
        assert!(hub.filtered.is_empty());
    }

    #[test]
    fn first_filter_of_a_session_seeds_from_all_notifiers() {
        let mut hub = AlertHub::new();
        hub.add_notifier(notifier_with("a", &[("admin", "error")]));
        hub.add_notifier(notifier_with("b", &[("shop", "success")]));

        hub.where_not_area("nowhere");
        assert_eq!(hub.filtered.len(), 2);
    }
}
