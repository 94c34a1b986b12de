//! Minimal CSS selector matching for in-memory hosts.
//!
//! Supports selector lists of compound selectors built from a tag name,
//! `#id`, `.class` and `[attr]`, `[attr="v"]`, `[attr^="v"]`. Combinators and
//! pseudo-classes are not supported; such selectors fail to parse.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\*|[A-Za-z][A-Za-z0-9-]*)").expect("valid tag regex"));
static PART_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:([.#])([A-Za-z_-][A-Za-z0-9_-]*)|\[\s*([A-Za-z_-][A-Za-z0-9_-]*)\s*(?:(\^=|=)\s*"([^"]*)"\s*)?\])"#)
        .expect("valid selector part regex")
});

/// Element view required to evaluate a selector.
pub trait SelectorSubject {
    fn tag(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeTest {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, AttributeTest)>,
}

impl Compound {
    fn parse(raw: &str) -> Option<Self> {
        let mut compound = Compound {
            tag: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
        };
        let mut rest = raw;
        if let Some(found) = TAG_RE.find(rest) {
            if found.as_str() != "*" {
                compound.tag = Some(found.as_str().to_ascii_lowercase());
            }
            rest = &rest[found.end()..];
        }
        while !rest.is_empty() {
            let captures = PART_RE.captures(rest)?;
            let consumed = captures.get(0)?.end();
            if let (Some(kind), Some(name)) = (captures.get(1), captures.get(2)) {
                match kind.as_str() {
                    "#" => compound.id = Some(name.as_str().to_string()),
                    _ => compound.classes.push(name.as_str().to_string()),
                }
            } else {
                let name = captures.get(3)?.as_str().to_string();
                let test = match (captures.get(4), captures.get(5)) {
                    (Some(op), Some(value)) if op.as_str() == "^=" => {
                        AttributeTest::Prefix(value.as_str().to_string())
                    }
                    (Some(_), Some(value)) => AttributeTest::Equals(value.as_str().to_string()),
                    _ => AttributeTest::Exists,
                };
                compound.attributes.push((name, test));
            }
            rest = &rest[consumed..];
        }
        if compound.tag.is_none()
            && compound.id.is_none()
            && compound.classes.is_empty()
            && compound.attributes.is_empty()
            && raw != "*"
        {
            return None;
        }
        Some(compound)
    }

    fn matches(&self, subject: &impl SelectorSubject) -> bool {
        if let Some(tag) = &self.tag {
            if !subject.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if subject.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| subject.has_class(class)) {
            return false;
        }
        self.attributes.iter().all(|(name, test)| {
            let Some(value) = subject.attribute(name) else {
                return false;
            };
            match test {
                AttributeTest::Exists => true,
                AttributeTest::Equals(expected) => value == expected,
                AttributeTest::Prefix(prefix) => value.starts_with(prefix.as_str()),
            }
        })
    }
}

/// Parsed comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    alternatives: Vec<Compound>,
}

impl SelectorList {
    /// Parses `raw`; returns `None` for empty or unsupported selectors.
    pub fn parse(raw: &str) -> Option<Self> {
        let alternatives = raw
            .split(',')
            .map(|part| Compound::parse(part.trim()))
            .collect::<Option<Vec<_>>>()?;
        if alternatives.is_empty() {
            return None;
        }
        Some(Self { alternatives })
    }

    pub fn matches(&self, subject: &impl SelectorSubject) -> bool {
        self.alternatives
            .iter()
            .any(|compound| compound.matches(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectorList, SelectorSubject};
    use std::collections::BTreeMap;

    struct Subject {
        tag: &'static str,
        classes: Vec<&'static str>,
        attributes: BTreeMap<&'static str, &'static str>,
    }

    impl SelectorSubject for Subject {
        fn tag(&self) -> &str {
            self.tag
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attributes.get(name).copied()
        }
    }

    fn anchor(href: &'static str) -> Subject {
        Subject {
            tag: "a",
            classes: vec![],
            attributes: BTreeMap::from([("href", href)]),
        }
    }

    #[test]
    fn matches_fragment_anchor_prefix() {
        let selector = SelectorList::parse("a[href^=\"#\"]").expect("selector parses");
        assert!(selector.matches(&anchor("#about")));
        assert!(selector.matches(&anchor("#")));
        assert!(!selector.matches(&anchor("/pricing")));
    }

    #[test]
    fn matches_any_alternative_in_list() {
        let selector =
            SelectorList::parse(".step, .commitment-card, .about-vision").expect("list parses");
        let card = Subject {
            tag: "div",
            classes: vec!["commitment-card", "wide"],
            attributes: BTreeMap::new(),
        };
        let other = Subject {
            tag: "div",
            classes: vec!["hero"],
            attributes: BTreeMap::new(),
        };
        assert!(selector.matches(&card));
        assert!(!selector.matches(&other));
    }

    #[test]
    fn matches_tag_and_id() {
        let selector = SelectorList::parse("section#pricing").expect("selector parses");
        let section = Subject {
            tag: "SECTION",
            classes: vec![],
            attributes: BTreeMap::from([("id", "pricing")]),
        };
        assert!(selector.matches(&section));
    }

    #[test]
    fn rejects_combinators_and_empty_input() {
        assert!(SelectorList::parse("nav a").is_none());
        assert!(SelectorList::parse("a:hover").is_none());
        assert!(SelectorList::parse("").is_none());
        assert!(SelectorList::parse(".a,").is_none());
    }
}
