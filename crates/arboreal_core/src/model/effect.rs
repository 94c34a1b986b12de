//! Declarative presentational effects.

use crate::model::style::{StyleProperty, Transform};
use crate::watch::WatcherId;
use std::fmt::{Display, Formatter};

/// Opaque handle for one element known to a page host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

impl Display for ElementId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

/// One visual mutation requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Sets (or clears, when `value` is empty) one inline style property.
    SetStyle {
        target: ElementId,
        property: StyleProperty,
        value: String,
    },
    /// Adds or removes one class.
    SetClass {
        target: ElementId,
        class: &'static str,
        present: bool,
    },
    /// Replaces the element text content.
    SetText { target: ElementId, text: String },
    /// Smoothly scrolls the window to an absolute vertical offset.
    ScrollTo { top: f64 },
    /// Appends a `<style>` block to the document head.
    InjectStylesheet { css: String },
    /// Stops delivering intersection entries for `target` on `watcher`.
    Unobserve { watcher: WatcherId, target: ElementId },
}

impl Effect {
    pub fn style(target: ElementId, property: StyleProperty, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }

    pub fn transform(target: ElementId, transform: Transform) -> Self {
        Self::style(target, StyleProperty::Transform, transform.to_css())
    }

    pub fn text(target: ElementId, text: impl Into<String>) -> Self {
        Self::SetText {
            target,
            text: text.into(),
        }
    }

    pub fn class(target: ElementId, class: &'static str, present: bool) -> Self {
        Self::SetClass {
            target,
            class,
            present,
        }
    }

    /// Element this effect mutates, if it targets one.
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::SetStyle { target, .. }
            | Self::SetClass { target, .. }
            | Self::SetText { target, .. }
            | Self::Unobserve { target, .. } => Some(*target),
            Self::ScrollTo { .. } | Self::InjectStylesheet { .. } => None,
        }
    }
}
