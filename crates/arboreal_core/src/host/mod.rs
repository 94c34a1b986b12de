//! Page host contracts.
//!
//! # Responsibility
//! - Define the seam between controller logic and a concrete document.
//! - Keep the controller free of any browser binding.
//!
//! # Invariants
//! - Queries never fail; an unmatched or unparsable selector yields nothing.
//! - `apply` is the only mutating entry point.

pub mod memory;
pub mod selector;

use crate::model::effect::{Effect, ElementId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Read/apply surface a document exposes to the controller.
pub trait PageHost {
    /// First element matching `selector`, in document order.
    fn query_selector(&self, selector: &str) -> Option<ElementId>;

    /// Every element matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<ElementId>;

    /// Descendants of `parent` matching `selector`, in document order.
    fn query_within(&self, parent: ElementId, selector: &str) -> Vec<ElementId>;

    /// Element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Rendered height in CSS pixels (`offsetHeight`).
    fn offset_height(&self, element: ElementId) -> f64;

    /// Distance from the top of the document to the element's top edge.
    fn document_top(&self, element: ElementId) -> f64;

    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Height of the layout viewport.
    fn viewport_height(&self) -> f64;

    fn apply(&mut self, effect: &Effect) -> HostResult<()>;
}

pub type HostResult<T> = Result<T, HostError>;

/// Errors raised while applying an effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    UnknownElement(ElementId),
    Rejected(String),
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownElement(id) => write!(f, "element is not known to this host: {id}"),
            Self::Rejected(message) => write!(f, "host rejected effect: {message}"),
        }
    }
}

impl Error for HostError {}
