//! In-memory page host.
//!
//! # Responsibility
//! - Provide a deterministic document for tests and the CLI.
//! - Record applied effects as inspectable visual state.
//!
//! # Invariants
//! - Element ids are dense indices in insertion (document) order.
//! - Scroll effects update `scroll_y` immediately and are kept in history.

use crate::host::selector::{SelectorList, SelectorSubject};
use crate::host::{HostError, HostResult, PageHost};
use crate::model::effect::{Effect, ElementId};
use crate::model::style::StyleProperty;
use std::collections::{BTreeMap, BTreeSet};

/// Builder describing one element to insert.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    document_top: f64,
    offset_height: f64,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Layout box: distance from document top and rendered height.
    pub fn layout(mut self, document_top: f64, offset_height: f64) -> Self {
        self.document_top = document_top;
        self.offset_height = offset_height;
        self
    }
}

/// One element of a [`MemoryPage`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    tag: String,
    parent: Option<ElementId>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<StyleProperty, String>,
    text: String,
    document_top: f64,
    offset_height: f64,
}

impl SelectorSubject for MemoryElement {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attributes.get(name).map(String::as_str)
    }
}

/// Scroll request recorded by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRecord {
    pub top: f64,
}

/// Deterministic in-memory document.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    elements: Vec<MemoryElement>,
    scroll_y: f64,
    viewport_height: f64,
    scrolls: Vec<ScrollRecord>,
    stylesheets: Vec<String>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new(800.0)
    }
}

impl MemoryPage {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            scroll_y: 0.0,
            viewport_height,
            scrolls: Vec::new(),
            stylesheets: Vec::new(),
        }
    }

    /// Appends an element under `parent` (or at the document root).
    pub fn insert(&mut self, parent: Option<ElementId>, spec: ElementSpec) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(MemoryElement {
            tag: spec.tag,
            parent,
            classes: spec.classes.into_iter().collect(),
            attributes: spec.attributes,
            styles: BTreeMap::new(),
            text: spec.text,
            document_top: spec.document_top,
            offset_height: spec.offset_height,
        });
        id
    }

    pub fn set_scroll_y(&mut self, offset: f64) {
        self.scroll_y = offset;
    }

    /// Inline style value, or `None` when unset or cleared.
    pub fn style(&self, element: ElementId, property: StyleProperty) -> Option<&str> {
        self.elements
            .get(element.0)
            .and_then(|el| el.styles.get(&property))
            .map(String::as_str)
    }

    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(element.0)
            .is_some_and(|el| el.classes.contains(class))
    }

    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.elements.get(element.0).map(|el| el.text.as_str())
    }

    pub fn scroll_history(&self) -> &[ScrollRecord] {
        &self.scrolls
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    fn element_mut(&mut self, element: ElementId) -> HostResult<&mut MemoryElement> {
        self.elements
            .get_mut(element.0)
            .ok_or(HostError::UnknownElement(element))
    }

    fn is_descendant(&self, element: ElementId, ancestor: ElementId) -> bool {
        let mut cursor = self.elements.get(element.0).and_then(|el| el.parent);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.elements.get(current.0).and_then(|el| el.parent);
        }
        false
    }

    fn matching(&self, selector: &str) -> impl Iterator<Item = ElementId> + '_ {
        let parsed = SelectorList::parse(selector);
        self.elements
            .iter()
            .enumerate()
            .filter(move |(_, el)| parsed.as_ref().is_some_and(|list| list.matches(*el)))
            .map(|(index, _)| ElementId(index))
    }
}

impl PageHost for MemoryPage {
    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.matching(selector).next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        self.matching(selector).collect()
    }

    fn query_within(&self, parent: ElementId, selector: &str) -> Vec<ElementId> {
        self.matching(selector)
            .filter(|id| self.is_descendant(*id, parent))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|el| el.attributes.get("id").map(String::as_str) == Some(id))
            .map(ElementId)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements
            .get(element.0)
            .and_then(|el| el.attributes.get(name))
            .cloned()
    }

    fn offset_height(&self, element: ElementId) -> f64 {
        self.elements
            .get(element.0)
            .map_or(0.0, |el| el.offset_height)
    }

    fn document_top(&self, element: ElementId) -> f64 {
        self.elements
            .get(element.0)
            .map_or(0.0, |el| el.document_top)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn apply(&mut self, effect: &Effect) -> HostResult<()> {
        match effect {
            Effect::SetStyle {
                target,
                property,
                value,
            } => {
                let element = self.element_mut(*target)?;
                if value.is_empty() {
                    element.styles.remove(property);
                } else {
                    element.styles.insert(*property, value.clone());
                }
            }
            Effect::SetClass {
                target,
                class,
                present,
            } => {
                let element = self.element_mut(*target)?;
                if *present {
                    element.classes.insert((*class).to_string());
                } else {
                    element.classes.remove(*class);
                }
            }
            Effect::SetText { target, text } => {
                self.element_mut(*target)?.text = text.clone();
            }
            Effect::ScrollTo { top } => {
                self.scroll_y = *top;
                self.scrolls.push(ScrollRecord { top: *top });
            }
            Effect::InjectStylesheet { css } => self.stylesheets.push(css.clone()),
            Effect::Unobserve { target, .. } => {
                self.element_mut(*target)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementSpec, MemoryPage};
    use crate::host::{HostError, PageHost};
    use crate::model::effect::{Effect, ElementId};
    use crate::model::style::StyleProperty;

    #[test]
    fn queries_follow_document_order_and_nesting() {
        let mut page = MemoryPage::default();
        let menu = page.insert(None, ElementSpec::new("div").class("mobile-menu"));
        let inner = page.insert(Some(menu), ElementSpec::new("a").attr("href", "#a"));
        let outer = page.insert(None, ElementSpec::new("a").attr("href", "#b"));

        assert_eq!(page.query_selector_all("a"), vec![inner, outer]);
        assert_eq!(page.query_within(menu, "a"), vec![inner]);
        assert_eq!(page.query_selector(".mobile-menu"), Some(menu));
        assert_eq!(page.query_selector("nav a"), None);
    }

    #[test]
    fn empty_style_value_clears_property() {
        let mut page = MemoryPage::default();
        let bar = page.insert(None, ElementSpec::new("span"));

        page.apply(&Effect::style(bar, StyleProperty::Transform, "scale(2)"))
            .expect("apply style");
        assert_eq!(page.style(bar, StyleProperty::Transform), Some("scale(2)"));

        page.apply(&Effect::style(bar, StyleProperty::Transform, ""))
            .expect("clear style");
        assert_eq!(page.style(bar, StyleProperty::Transform), None);
    }

    #[test]
    fn unknown_element_is_reported() {
        let mut page = MemoryPage::default();
        let err = page
            .apply(&Effect::class(ElementId(9), "active", true))
            .expect_err("unknown element must fail");
        assert_eq!(err, HostError::UnknownElement(ElementId(9)));
    }
}
