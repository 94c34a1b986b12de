//! Scroll-reveal of content sections and staggered group delays.

use crate::model::effect::{Effect, ElementId};
use crate::model::style::{css_seconds, StyleProperty, Transform};
use crate::watch::{IntersectionEntry, IntersectionWatcher, WatcherId, WatcherOptions};

/// Class applied once an element has been revealed.
pub const REVEALED_CLASS: &str = "animate-in";

/// Rule backing [`REVEALED_CLASS`]; overrides the inline hidden state.
pub const REVEALED_STYLESHEET: &str =
    ".animate-in {\n    opacity: 1 !important;\n    transform: translateY(0) !important;\n}\n";

const HIDDEN_OFFSET_PX: f64 = 30.0;
const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Pending/revealed tracking for content sections.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    watcher: IntersectionWatcher,
    revealed: Vec<ElementId>,
}

impl ScrollReveal {
    pub fn new(id: WatcherId, threshold: f64) -> Self {
        Self {
            watcher: IntersectionWatcher::new(id, WatcherOptions::with_threshold(threshold)),
            revealed: Vec::new(),
        }
    }

    /// Hides `targets`, starts observing them and injects the reveal rule.
    pub fn attach(&mut self, targets: &[ElementId]) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(targets.len() * 3 + 1);
        for target in targets {
            effects.push(Effect::style(*target, StyleProperty::Opacity, "0"));
            effects.push(Effect::transform(
                *target,
                Transform::TranslateY(HIDDEN_OFFSET_PX),
            ));
            effects.push(Effect::style(
                *target,
                StyleProperty::Transition,
                REVEAL_TRANSITION,
            ));
            self.watcher.observe(*target);
        }
        effects.push(Effect::InjectStylesheet {
            css: REVEALED_STYLESHEET.to_string(),
        });
        effects
    }

    pub fn watcher(&self) -> &IntersectionWatcher {
        &self.watcher
    }

    pub fn is_revealed(&self, target: ElementId) -> bool {
        self.revealed.contains(&target)
    }

    /// Reveals every target that crossed the threshold for the first time.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<Effect> {
        let fired = self.watcher.notify(entries);
        let mut effects = Vec::with_capacity(fired.len() * 2);
        for target in fired {
            self.revealed.push(target);
            effects.push(Effect::class(target, REVEALED_CLASS, true));
            effects.push(Effect::Unobserve {
                watcher: self.watcher.id(),
                target,
            });
        }
        effects
    }
}

/// Assigns `index * step_s` transition delays across one element group.
pub fn stagger_delays(group: &[ElementId], step_s: f64) -> Vec<Effect> {
    group
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Effect::style(
                *element,
                StyleProperty::TransitionDelay,
                css_seconds(index as f64 * step_s),
            )
        })
        .collect()
}
