//! Scroll-position driven effects: nav elevation and hero parallax.
//!
//! Both are pure functions of the current offset; neither keeps history
//! beyond the parallax freeze.

use crate::model::effect::{Effect, ElementId};
use crate::model::style::{StyleProperty, Transform};

/// Drop shadow on the navigation bar once the page is scrolled.
#[derive(Debug, Clone)]
pub struct NavElevation {
    nav: ElementId,
    threshold_px: f64,
    shadow: String,
}

impl NavElevation {
    pub fn new(nav: ElementId, threshold_px: f64, shadow: impl Into<String>) -> Self {
        Self {
            nav,
            threshold_px,
            shadow: shadow.into(),
        }
    }

    /// Whether an offset counts as scrolled; strictly above the threshold.
    pub fn is_elevated(&self, offset: f64) -> bool {
        offset > self.threshold_px
    }

    pub fn on_scroll(&self, offset: f64) -> Effect {
        let value = if self.is_elevated(offset) {
            self.shadow.as_str()
        } else {
            "none"
        };
        Effect::style(self.nav, StyleProperty::BoxShadow, value)
    }
}

/// Vertical parallax on the hero background.
///
/// Offsets at or beyond one viewport height leave the transform untouched,
/// so the last applied value stays in place.
#[derive(Debug, Clone)]
pub struct HeroParallax {
    hero: ElementId,
    factor: f64,
}

impl HeroParallax {
    pub fn new(hero: ElementId, factor: f64) -> Self {
        Self { hero, factor }
    }

    pub fn on_scroll(&self, offset: f64, viewport_height: f64) -> Option<Effect> {
        if offset >= viewport_height {
            return None;
        }
        Some(Effect::transform(
            self.hero,
            Transform::TranslateY(offset * self.factor),
        ))
    }
}
