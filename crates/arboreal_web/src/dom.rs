//! `PageHost` backed by the live browser document.
//!
//! # Responsibility
//! - Map DOM elements to stable `ElementId` handles for the controller.
//! - Apply controller effects to inline styles, classes and the window.
//!
//! # Invariants
//! - An element gets one id for the lifetime of the page, resolved through
//!   an identity-keyed JS `Map` rather than a scan.
//! - DOM exceptions surface as `HostError::Rejected`, never as panics.

use arboreal_core::{Effect, ElementId, HostError, HostResult, PageHost, WatcherId};
use js_sys::{Map, Reflect};
use std::cell::RefCell;
use std::collections::BTreeMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, IntersectionObserver, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

pub struct DomPage {
    window: Window,
    document: Document,
    elements: RefCell<Vec<Element>>,
    handles: Map,
    observers: BTreeMap<WatcherId, IntersectionObserver>,
}

impl DomPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            elements: RefCell::new(Vec::new()),
            handles: Map::new(),
            observers: BTreeMap::new(),
        }
    }

    /// Handle for a DOM element, if the controller has seen it.
    pub fn id_of(&self, element: &Element) -> Option<ElementId> {
        slot_handle(self.handles.get(element).as_f64()?)
    }

    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.elements.borrow().get(id.0).cloned()
    }

    /// Routes `Effect::Unobserve` for `id` to `observer`.
    pub fn register_observer(&mut self, id: WatcherId, observer: IntersectionObserver) {
        self.observers.insert(id, observer);
    }

    /// Handle for `element`, assigning a new one on first sight.
    pub fn adopt(&self, element: Element) -> ElementId {
        if let Some(id) = self.id_of(&element) {
            return id;
        }
        let mut elements = self.elements.borrow_mut();
        let id = ElementId(elements.len());
        self.handles.set(&element, &JsValue::from_f64(handle_slot(id)));
        elements.push(element);
        id
    }

    fn intern_all(&self, list: Result<NodeList, JsValue>) -> Vec<ElementId> {
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.adopt(element))
            .collect()
    }

    fn require(&self, id: ElementId) -> HostResult<Element> {
        self.element(id).ok_or(HostError::UnknownElement(id))
    }

    fn inject_stylesheet(&self, css: &str) -> HostResult<()> {
        let style = self.document.create_element("style").map_err(rejected)?;
        style.set_text_content(Some(css));
        let head = self
            .document
            .head()
            .ok_or_else(|| HostError::Rejected("document has no head".to_string()))?;
        head.append_child(&style).map_err(rejected)?;
        Ok(())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl PageHost for DomPage {
    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(|element| self.adopt(element))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        self.intern_all(self.document.query_selector_all(selector))
    }

    fn query_within(&self, parent: ElementId, selector: &str) -> Vec<ElementId> {
        match self.element(parent) {
            Some(parent) => self.intern_all(parent.query_selector_all(selector)),
            None => Vec::new(),
        }
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.adopt(element))
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn offset_height(&self, element: ElementId) -> f64 {
        self.element(element)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn document_top(&self, element: ElementId) -> f64 {
        self.element(element)
            .map_or(0.0, |el| el.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn apply(&mut self, effect: &Effect) -> HostResult<()> {
        match effect {
            Effect::SetStyle {
                target,
                property,
                value,
            } => {
                let style = inline_style(&self.require(*target)?)?;
                if value.is_empty() {
                    style
                        .remove_property(property.css_name())
                        .map_err(rejected)?;
                } else {
                    style
                        .set_property(property.css_name(), value)
                        .map_err(rejected)?;
                }
            }
            Effect::SetClass {
                target,
                class,
                present,
            } => {
                let classes = self.require(*target)?.class_list();
                if *present {
                    classes.add_1(class).map_err(rejected)?;
                } else {
                    classes.remove_1(class).map_err(rejected)?;
                }
            }
            Effect::SetText { target, text } => {
                self.require(*target)?.set_text_content(Some(text));
            }
            Effect::ScrollTo { top } => self.smooth_scroll_to(*top),
            Effect::InjectStylesheet { css } => self.inject_stylesheet(css)?,
            Effect::Unobserve { watcher, target } => {
                let element = self.require(*target)?;
                if let Some(observer) = self.observers.get(watcher) {
                    observer.unobserve(&element);
                }
            }
        }
        Ok(())
    }
}

/// Inline style of an HTML or SVG element.
fn inline_style(element: &Element) -> HostResult<CssStyleDeclaration> {
    Reflect::get(element, &JsValue::from_str("style"))
        .map_err(rejected)?
        .dyn_into::<CssStyleDeclaration>()
        .map_err(|_| HostError::Rejected("element has no inline style".to_string()))
}

fn rejected(err: JsValue) -> HostError {
    HostError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn handle_slot(id: ElementId) -> f64 {
    id.0 as f64
}

/// Inverse of [`handle_slot`]; anything but a whole non-negative number is
/// not one of ours.
fn slot_handle(slot: f64) -> Option<ElementId> {
    if slot.is_finite() && slot >= 0.0 && slot.fract() == 0.0 {
        Some(ElementId(slot as usize))
    } else {
        None
    }
}
