//! Page interaction controller.
//!
//! # Responsibility
//! - Resolve every behavior against the page once, at startup.
//! - Turn page events into effects and apply them through the host.
//!
//! # Invariants
//! - A missing element disables only the behavior that needs it.
//! - A failed effect is logged and skipped; later effects still apply.
//! - Scroll effects are produced in registration order: nav, then parallax.

pub mod anchor;
pub mod examples;
pub mod leaf;
pub mod menu;
pub mod reveal;
pub mod scroll;

use crate::config::InteractionConfig;
use crate::host::PageHost;
use crate::logging::STARTUP_BANNER;
use crate::model::effect::{Effect, ElementId};
use crate::watch::{IntersectionEntry, WatcherId, WatcherOptions};
use anchor::AnchorScroll;
use examples::ExampleReveal;
use leaf::LeafHover;
use log::{info, warn};
use menu::{MenuState, MenuToggle};
use reveal::{stagger_delays, ScrollReveal};
use scroll::{HeroParallax, NavElevation};

/// Watcher for scroll-revealed sections.
pub const REVEAL_WATCHER: WatcherId = WatcherId(1);
/// Watcher for the example box.
pub const EXAMPLE_WATCHER: WatcherId = WatcherId(2);

/// Page events the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ToggleClick,
    MenuLinkClick(ElementId),
    Scroll,
    AnchorClick(ElementId),
    Intersection {
        watcher: WatcherId,
        entries: Vec<IntersectionEntry>,
    },
    PointerEnter(ElementId),
    PointerLeave(ElementId),
}

/// What happened while handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The host must suppress the event's default action.
    pub default_prevented: bool,
    pub applied: usize,
    pub failed: usize,
}

/// One intersection observer the host must create.
#[derive(Debug, Clone, PartialEq)]
pub struct WatcherWiring {
    pub id: WatcherId,
    pub options: WatcherOptions,
    pub targets: Vec<ElementId>,
}

/// Listener registrations the host must perform after attach.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wiring {
    pub toggle: Option<ElementId>,
    pub menu_links: Vec<ElementId>,
    pub anchors: Vec<ElementId>,
    pub leaves: Vec<ElementId>,
    pub watchers: Vec<WatcherWiring>,
    pub scroll: bool,
}

/// Explicit state for every page behavior.
#[derive(Debug, Clone)]
pub struct PageController {
    menu: Option<MenuToggle>,
    reveal: ScrollReveal,
    nav: Option<NavElevation>,
    anchors: AnchorScroll,
    parallax: Option<HeroParallax>,
    examples: ExampleReveal,
    leaves: LeafHover,
}

impl PageController {
    /// Resolves behaviors against `host` and applies their initial state.
    pub fn attach<H: PageHost>(host: &mut H, config: &InteractionConfig) -> Self {
        let selectors = &config.selectors;

        let menu = match (
            host.query_selector(&selectors.nav_toggle),
            host.query_selector(&selectors.mobile_menu),
        ) {
            (Some(toggle), Some(panel)) => Some(MenuToggle::new(
                toggle,
                panel,
                host.query_within(toggle, &selectors.nav_toggle_bars),
                host.query_within(panel, &selectors.menu_links),
            )),
            _ => None,
        };

        let mut reveal = ScrollReveal::new(REVEAL_WATCHER, config.reveal_threshold);
        let reveal_targets = host.query_selector_all(&selectors.scroll_reveal);
        let mut initial = reveal.attach(&reveal_targets);
        initial.extend(stagger_delays(
            &host.query_selector_all(&selectors.steps),
            config.step_stagger_s,
        ));
        initial.extend(stagger_delays(
            &host.query_selector_all(&selectors.commitment_cards),
            config.card_stagger_s,
        ));

        let nav_element = host.query_selector(&selectors.nav);
        let nav = nav_element.map(|nav| {
            NavElevation::new(nav, config.nav_shadow_threshold_px, config.nav_shadow.clone())
        });
        let anchors = AnchorScroll::new(
            host.query_selector_all(&selectors.anchors),
            nav_element,
            config.anchor_margin_px,
        );
        let parallax = host
            .query_selector(&selectors.hero_gradient)
            .map(|hero| HeroParallax::new(hero, config.parallax_factor));

        let examples = ExampleReveal::new(
            host.query_selector_all(&selectors.example_items),
            host.query_selector(&selectors.example_box),
            EXAMPLE_WATCHER,
            config.example_threshold,
            config.example_stagger_s,
        );
        initial.extend(examples.attach());

        let leaves = LeafHover::new(
            host.query_selector_all(&selectors.leaves),
            config.leaf_hover_scale,
        );
        initial.extend(leaves.attach());

        let controller = Self {
            menu,
            reveal,
            nav,
            anchors,
            parallax,
            examples,
            leaves,
        };
        let (applied, failed) = apply_effects(host, &initial);

        info!(
            "event=controller_attached module=controller status=ok menu={} reveal_targets={} nav={} anchors={} parallax={} example_items={} example_box={} leaves={} applied={} failed={}",
            controller.menu.is_some(),
            reveal_targets.len(),
            controller.nav.is_some(),
            controller.anchors.anchors().len(),
            controller.parallax.is_some(),
            controller.examples.items().len(),
            controller.examples.watcher().is_some(),
            controller.leaves.leaves().len(),
            applied,
            failed
        );
        info!("{STARTUP_BANNER}");
        controller
    }

    /// Listener registrations needed by a live host.
    pub fn wiring(&self) -> Wiring {
        let mut watchers = vec![WatcherWiring {
            id: self.reveal.watcher().id(),
            options: self.reveal.watcher().options().clone(),
            targets: self.reveal.watcher().observed().collect(),
        }];
        if let Some(watcher) = self.examples.watcher() {
            watchers.push(WatcherWiring {
                id: watcher.id(),
                options: watcher.options().clone(),
                targets: watcher.observed().collect(),
            });
        }
        Wiring {
            toggle: self.menu.as_ref().map(MenuToggle::toggle_element),
            menu_links: self
                .menu
                .as_ref()
                .map(|menu| menu.links().to_vec())
                .unwrap_or_default(),
            anchors: self.anchors.anchors().to_vec(),
            leaves: self.leaves.leaves().to_vec(),
            watchers,
            scroll: self.nav.is_some() || self.parallax.is_some(),
        }
    }

    /// `None` when the toggle or the panel is missing.
    pub fn menu_state(&self) -> Option<MenuState> {
        self.menu.as_ref().map(MenuToggle::state)
    }

    pub fn scroll_reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    pub fn example_reveal(&self) -> &ExampleReveal {
        &self.examples
    }

    /// Computes the effects for `event` without applying them.
    ///
    /// Returns whether the default action must be suppressed, plus effects.
    pub fn effects_for<H: PageHost>(
        &mut self,
        host: &H,
        event: &PageEvent,
    ) -> (bool, Vec<Effect>) {
        match event {
            PageEvent::ToggleClick => {
                let effects = self
                    .menu
                    .as_mut()
                    .map(MenuToggle::on_toggle_click)
                    .unwrap_or_default();
                (false, effects)
            }
            PageEvent::MenuLinkClick(link) => {
                let effects = self
                    .menu
                    .as_mut()
                    .filter(|menu| menu.is_link(*link))
                    .map(MenuToggle::on_link_click)
                    .unwrap_or_default();
                (false, effects)
            }
            PageEvent::Scroll => {
                let offset = host.scroll_y();
                let mut effects = Vec::with_capacity(2);
                if let Some(nav) = &self.nav {
                    effects.push(nav.on_scroll(offset));
                }
                if let Some(parallax) = &self.parallax {
                    effects.extend(parallax.on_scroll(offset, host.viewport_height()));
                }
                (false, effects)
            }
            PageEvent::AnchorClick(anchor) => {
                let Some(href) = host.attribute(*anchor, "href") else {
                    return (false, Vec::new());
                };
                let outcome = self.anchors.on_click(host, &href);
                (outcome.prevent_default, outcome.effects)
            }
            PageEvent::Intersection { watcher, entries } => {
                let effects = match *watcher {
                    REVEAL_WATCHER => self.reveal.on_intersection(entries),
                    EXAMPLE_WATCHER => self.examples.on_intersection(entries),
                    other => {
                        warn!("event=unknown_watcher module=controller watcher={other}");
                        Vec::new()
                    }
                };
                (false, effects)
            }
            PageEvent::PointerEnter(leaf) => {
                (false, self.leaves.on_enter(*leaf).into_iter().collect())
            }
            PageEvent::PointerLeave(leaf) => {
                (false, self.leaves.on_leave(*leaf).into_iter().collect())
            }
        }
    }

    /// Handles one event end to end.
    pub fn handle<H: PageHost>(&mut self, host: &mut H, event: &PageEvent) -> EventOutcome {
        let (default_prevented, effects) = self.effects_for(&*host, event);
        let (applied, failed) = apply_effects(host, &effects);
        EventOutcome {
            default_prevented,
            applied,
            failed,
        }
    }
}

/// Applies effects in order; failures are logged and skipped.
///
/// Returns `(applied, failed)` counts.
pub fn apply_effects<H: PageHost>(host: &mut H, effects: &[Effect]) -> (usize, usize) {
    let mut failed = 0;
    for effect in effects {
        if let Err(err) = host.apply(effect) {
            failed += 1;
            warn!("event=effect_failed module=controller status=error error={err}");
        }
    }
    (effects.len() - failed, failed)
}
