//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `arboreal_core` linkage without a browser.
//! - Replay a short scripted session against the in-memory page and print
//!   the resulting visual state, deterministically.
//!
//! The startup banner belongs to the controller's log output. Set
//! `ARBOREAL_LOG_DIR` (absolute path) to write it, with the rest of the
//! session log, to rolling files.

use arboreal_core::{
    core_version, default_log_level, init_logging, ElementSpec, IntersectionEntry,
    InteractionConfig, MemoryPage, PageController, PageEvent, StyleProperty, EXAMPLE_WATCHER,
    REVEALED_CLASS, REVEAL_WATCHER,
};

fn main() {
    if let Ok(dir) = std::env::var("ARBOREAL_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &dir) {
            eprintln!("arboreal_cli logging disabled: {err}");
        }
    }

    for line in replay_session() {
        println!("{line}");
    }
}

/// Replays a scripted session against an in-memory landing page.
fn replay_session() -> Vec<String> {
    let mut report = vec![format!("arboreal_core version={}", core_version())];

    let mut page = MemoryPage::new(900.0);
    let nav = page.insert(None, ElementSpec::new("nav").class("nav").layout(0.0, 72.0));
    let toggle = page.insert(Some(nav), ElementSpec::new("button").class("nav-toggle"));
    page.insert(Some(toggle), ElementSpec::new("span"));
    page.insert(Some(toggle), ElementSpec::new("span"));
    let menu = page.insert(None, ElementSpec::new("div").class("mobile-menu"));
    page.insert(Some(menu), ElementSpec::new("a").attr("href", "#how"));
    let hero = page.insert(None, ElementSpec::new("div").class("hero-gradient"));
    let step = page.insert(None, ElementSpec::new("div").class("step"));
    page.insert(None, ElementSpec::new("section").id("how").layout(1400.0, 500.0));
    let anchor = page.insert(None, ElementSpec::new("a").attr("href", "#how"));
    let example_box = page.insert(None, ElementSpec::new("div").class("example-box"));
    let item = page.insert(
        Some(example_box),
        ElementSpec::new("li").class("example-item"),
    );

    let mut controller = PageController::attach(&mut page, &InteractionConfig::default());

    controller.handle(&mut page, &PageEvent::ToggleClick);
    report.push(format!(
        "menu_open={}",
        controller.menu_state().is_some_and(|s| s.is_open())
    ));

    for offset in [50.0, 300.0, 1200.0] {
        page.set_scroll_y(offset);
        controller.handle(&mut page, &PageEvent::Scroll);
        report.push(format!(
            "scroll={offset} nav_shadow={:?} hero_transform={:?}",
            page.style(nav, StyleProperty::BoxShadow).unwrap_or(""),
            page.style(hero, StyleProperty::Transform).unwrap_or("")
        ));
    }

    controller.handle(
        &mut page,
        &PageEvent::Intersection {
            watcher: REVEAL_WATCHER,
            entries: vec![IntersectionEntry::entering(step)],
        },
    );
    controller.handle(
        &mut page,
        &PageEvent::Intersection {
            watcher: EXAMPLE_WATCHER,
            entries: vec![IntersectionEntry::entering(example_box)],
        },
    );
    report.push(format!(
        "step_revealed={} example_opacity={}",
        page.has_class(step, REVEALED_CLASS),
        page.style(item, StyleProperty::Opacity).unwrap_or("")
    ));

    let outcome = controller.handle(&mut page, &PageEvent::AnchorClick(anchor));
    report.push(format!(
        "anchor_prevented={} scroll_target={:?}",
        outcome.default_prevented,
        page.scroll_history().last().map(|record| record.top)
    ));
    report
}
