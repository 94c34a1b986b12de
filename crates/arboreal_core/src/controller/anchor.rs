//! Smooth scrolling to in-page fragment targets.

use crate::host::PageHost;
use crate::model::effect::{Effect, ElementId};
use once_cell::sync::Lazy;
use regex::Regex;

// CSS identifier: `--` or an optional `-` before a letter, `_` or non-ASCII
// code point, then name characters. Escapes are not supported.
static FRAGMENT_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#((?:--|-?[A-Za-z_[^\x00-\x7F]])[A-Za-z0-9_\-[^\x00-\x7F]]*)$")
        .expect("valid fragment id regex")
});

/// Result of one anchor click.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorOutcome {
    /// Whether the browser's default jump must be suppressed.
    pub prevent_default: bool,
    pub effects: Vec<Effect>,
}

impl AnchorOutcome {
    fn passthrough() -> Self {
        Self {
            prevent_default: false,
            effects: Vec::new(),
        }
    }
}

/// Extracts the element id from a `#fragment` href.
///
/// Returns `None` for the bare root `#`, for non-fragment hrefs, and for
/// fragments that are not a CSS identifier.
pub fn fragment_id(href: &str) -> Option<&str> {
    FRAGMENT_ID_RE
        .captures(href.trim())
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str())
}

/// Anchor click handling, offset by the nav bar height and a fixed margin.
#[derive(Debug, Clone)]
pub struct AnchorScroll {
    anchors: Vec<ElementId>,
    nav: Option<ElementId>,
    margin_px: f64,
}

impl AnchorScroll {
    pub fn new(anchors: Vec<ElementId>, nav: Option<ElementId>, margin_px: f64) -> Self {
        Self {
            anchors,
            nav,
            margin_px,
        }
    }

    pub fn anchors(&self) -> &[ElementId] {
        &self.anchors
    }

    /// Resolves `href` against `host` and computes the scroll, if any.
    pub fn on_click(&self, host: &impl PageHost, href: &str) -> AnchorOutcome {
        let href = href.trim();
        if href == "#" {
            return AnchorOutcome::passthrough();
        }

        let target = fragment_id(href).and_then(|id| host.element_by_id(id));
        let Some(target) = target else {
            log::debug!("event=anchor_target_missing module=anchor href={href}");
            return AnchorOutcome {
                prevent_default: true,
                effects: Vec::new(),
            };
        };

        let nav_height = self.nav.map_or(0.0, |nav| host.offset_height(nav));
        let top = host.document_top(target) - nav_height - self.margin_px;
        AnchorOutcome {
            prevent_default: true,
            effects: vec![Effect::ScrollTo { top }],
        }
    }
}
