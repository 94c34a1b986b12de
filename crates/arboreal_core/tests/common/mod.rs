#![allow(dead_code)]

use arboreal_core::{ElementId, ElementSpec, InteractionConfig, MemoryPage, PageController};

pub const VIEWPORT_HEIGHT: f64 = 900.0;
pub const NAV_HEIGHT: f64 = 72.0;
pub const SECTION1_TOP: f64 = 1480.0;

/// Handles to the elements of the landing page fixture.
pub struct Landing {
    pub page: MemoryPage,
    pub nav: ElementId,
    pub toggle: ElementId,
    pub bars: Vec<ElementId>,
    pub menu: ElementId,
    pub menu_links: Vec<ElementId>,
    pub hero: ElementId,
    pub steps: Vec<ElementId>,
    pub cards: Vec<ElementId>,
    pub vision: ElementId,
    pub section1: ElementId,
    pub example_box: ElementId,
    pub examples: Vec<ElementId>,
    pub leaves: Vec<ElementId>,
    pub anchor_root: ElementId,
    pub anchor_section1: ElementId,
    pub anchor_missing: ElementId,
}

pub fn landing_page() -> Landing {
    let mut page = MemoryPage::new(VIEWPORT_HEIGHT);

    let nav = page.insert(None, ElementSpec::new("nav").class("nav").layout(0.0, NAV_HEIGHT));
    let toggle = page.insert(Some(nav), ElementSpec::new("button").class("nav-toggle"));
    let bars = (0..3)
        .map(|_| page.insert(Some(toggle), ElementSpec::new("span")))
        .collect();
    let anchor_root = page.insert(Some(nav), ElementSpec::new("a").attr("href", "#"));

    let menu = page.insert(None, ElementSpec::new("div").class("mobile-menu"));
    let menu_links = ["#how-it-works", "#about"]
        .iter()
        .map(|href| page.insert(Some(menu), ElementSpec::new("a").attr("href", href)))
        .collect();

    let hero = page.insert(None, ElementSpec::new("div").class("hero-gradient"));
    let steps = (0..4)
        .map(|i| {
            page.insert(
                None,
                ElementSpec::new("div")
                    .class("step")
                    .layout(900.0 + f64::from(i) * 120.0, 100.0),
            )
        })
        .collect();
    let cards = (0..3)
        .map(|_| page.insert(None, ElementSpec::new("article").class("commitment-card")))
        .collect();
    let vision = page.insert(None, ElementSpec::new("div").class("about-vision"));
    let section1 = page.insert(
        None,
        ElementSpec::new("section")
            .id("section1")
            .layout(SECTION1_TOP, 600.0),
    );

    let example_box = page.insert(None, ElementSpec::new("div").class("example-box"));
    let examples = (0..3)
        .map(|_| page.insert(Some(example_box), ElementSpec::new("li").class("example-item")))
        .collect();
    let leaves = (0..2)
        .map(|_| page.insert(None, ElementSpec::new("span").class("leaf")))
        .collect();

    let anchor_section1 = page.insert(None, ElementSpec::new("a").attr("href", "#section1"));
    let anchor_missing = page.insert(None, ElementSpec::new("a").attr("href", "#missing-id"));

    Landing {
        page,
        nav,
        toggle,
        bars,
        menu,
        menu_links,
        hero,
        steps,
        cards,
        vision,
        section1,
        example_box,
        examples,
        leaves,
        anchor_root,
        anchor_section1,
        anchor_missing,
    }
}

pub fn attach(landing: &mut Landing) -> PageController {
    PageController::attach(&mut landing.page, &InteractionConfig::default())
}
