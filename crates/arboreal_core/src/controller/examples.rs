//! Example-list reveal, triggered by its containing box.

use crate::controller::reveal::stagger_delays;
use crate::model::effect::{Effect, ElementId};
use crate::model::style::{StyleProperty, Transform};
use crate::watch::{IntersectionEntry, IntersectionWatcher, WatcherId, WatcherOptions};

const HIDDEN_OFFSET_PX: f64 = -20.0;
const EXAMPLE_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

/// Staggered list of example items revealed together.
///
/// Items are revealed in one batch; the per-item delay only shapes the
/// transition timing.
#[derive(Debug, Clone)]
pub struct ExampleReveal {
    items: Vec<ElementId>,
    stagger_s: f64,
    watcher: Option<IntersectionWatcher>,
    revealed: bool,
}

impl ExampleReveal {
    /// Builds the reveal; without a box the items stay hidden for good.
    pub fn new(
        items: Vec<ElementId>,
        example_box: Option<ElementId>,
        id: WatcherId,
        threshold: f64,
        stagger_s: f64,
    ) -> Self {
        let watcher = example_box.map(|target| {
            let mut watcher = IntersectionWatcher::new(id, WatcherOptions::with_threshold(threshold));
            watcher.observe(target);
            watcher
        });
        Self {
            items,
            stagger_s,
            watcher,
            revealed: false,
        }
    }

    pub fn items(&self) -> &[ElementId] {
        &self.items
    }

    pub fn watcher(&self) -> Option<&IntersectionWatcher> {
        self.watcher.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Initial hidden state plus per-item delays.
    pub fn attach(&self) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(self.items.len() * 4);
        for item in &self.items {
            effects.push(Effect::style(*item, StyleProperty::Opacity, "0"));
            effects.push(Effect::transform(
                *item,
                Transform::TranslateX(HIDDEN_OFFSET_PX),
            ));
            effects.push(Effect::style(
                *item,
                StyleProperty::Transition,
                EXAMPLE_TRANSITION,
            ));
        }
        effects.extend(stagger_delays(&self.items, self.stagger_s));
        effects
    }

    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<Effect> {
        let Some(watcher) = self.watcher.as_mut() else {
            return Vec::new();
        };
        let fired = watcher.notify(entries);
        if fired.is_empty() {
            return Vec::new();
        }

        self.revealed = true;
        let mut effects = Vec::with_capacity(self.items.len() * 2 + fired.len());
        for item in &self.items {
            effects.push(Effect::style(*item, StyleProperty::Opacity, "1"));
            effects.push(Effect::transform(*item, Transform::TranslateX(0.0)));
        }
        for target in fired {
            effects.push(Effect::Unobserve {
                watcher: watcher.id(),
                target,
            });
        }
        effects
    }
}
