//! Viewport intersection subscriptions.
//!
//! # Responsibility
//! - Model one intersection observer as an explicit subscription that tests
//!   can feed synthetic entries into.
//! - Enforce fire-then-unsubscribe: a target fires at most once.
//!
//! # Invariants
//! - `notify` never reports a target that is not currently observed.
//! - A reported target is removed from the observed set before returning.

use crate::model::effect::ElementId;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Stable identifier for one watcher owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WatcherId(pub u32);

impl Display for WatcherId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "watcher-{}", self.0)
    }
}

/// Observer options mirrored onto the host observer.
#[derive(Debug, Clone, PartialEq)]
pub struct WatcherOptions {
    /// Fraction of the target that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// CSS margin applied around the viewport root.
    pub root_margin: String,
}

impl WatcherOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px".to_string(),
        }
    }
}

/// One intersection notification for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(target: ElementId) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn leaving(target: ElementId) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Explicit intersection subscription over a set of elements.
#[derive(Debug, Clone)]
pub struct IntersectionWatcher {
    id: WatcherId,
    options: WatcherOptions,
    observed: BTreeSet<ElementId>,
}

impl IntersectionWatcher {
    pub fn new(id: WatcherId, options: WatcherOptions) -> Self {
        Self {
            id,
            options,
            observed: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> WatcherId {
        self.id
    }

    pub fn options(&self) -> &WatcherOptions {
        &self.options
    }

    pub fn observe(&mut self, target: ElementId) {
        self.observed.insert(target);
    }

    pub fn is_observing(&self, target: ElementId) -> bool {
        self.observed.contains(&target)
    }

    pub fn observed(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.observed.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Delivers a batch of entries.
    ///
    /// Returns the targets that crossed the threshold, in entry order. Each
    /// returned target has already been unobserved, so a later entry for it
    /// is ignored.
    pub fn notify(&mut self, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        let mut fired = Vec::new();
        for entry in entries {
            if entry.is_intersecting && self.observed.remove(&entry.target) {
                fired.push(entry.target);
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::{IntersectionEntry, IntersectionWatcher, WatcherId, WatcherOptions};
    use crate::model::effect::ElementId;

    fn watcher() -> IntersectionWatcher {
        IntersectionWatcher::new(WatcherId(7), WatcherOptions::with_threshold(0.1))
    }

    #[test]
    fn fires_once_then_unsubscribes() {
        let mut watcher = watcher();
        watcher.observe(ElementId(1));
        watcher.observe(ElementId(2));

        let fired = watcher.notify(&[IntersectionEntry::entering(ElementId(1))]);
        assert_eq!(fired, vec![ElementId(1)]);
        assert!(!watcher.is_observing(ElementId(1)));
        assert!(watcher.is_observing(ElementId(2)));

        let again = watcher.notify(&[IntersectionEntry::entering(ElementId(1))]);
        assert!(again.is_empty());
    }

    #[test]
    fn non_intersecting_entries_keep_subscription() {
        let mut watcher = watcher();
        watcher.observe(ElementId(3));

        let fired = watcher.notify(&[IntersectionEntry::leaving(ElementId(3))]);
        assert!(fired.is_empty());
        assert!(watcher.is_observing(ElementId(3)));
    }

    #[test]
    fn duplicate_entries_in_one_batch_fire_once() {
        let mut watcher = watcher();
        watcher.observe(ElementId(4));

        let fired = watcher.notify(&[
            IntersectionEntry::entering(ElementId(4)),
            IntersectionEntry::entering(ElementId(4)),
        ]);
        assert_eq!(fired, vec![ElementId(4)]);
    }

    #[test]
    fn entries_for_unobserved_targets_are_ignored() {
        let mut watcher = watcher();
        watcher.observe(ElementId(5));

        assert!(watcher
            .notify(&[IntersectionEntry::entering(ElementId(6))])
            .is_empty());
        assert_eq!(watcher.len(), 1);
        assert_eq!(watcher.options().root_margin, "0px");
    }
}
