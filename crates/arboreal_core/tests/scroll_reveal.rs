mod common;

use arboreal_core::{
    Effect, IntersectionEntry, PageEvent, StyleProperty, REVEALED_CLASS, REVEAL_WATCHER,
};
use common::{attach, landing_page};

fn entering(target: arboreal_core::ElementId) -> PageEvent {
    PageEvent::Intersection {
        watcher: REVEAL_WATCHER,
        entries: vec![IntersectionEntry::entering(target)],
    }
}

#[test]
fn sections_start_hidden_and_observed() {
    let mut landing = landing_page();
    let controller = attach(&mut landing);

    let targets: Vec<_> = landing
        .steps
        .iter()
        .chain(landing.cards.iter())
        .chain(std::iter::once(&landing.vision))
        .copied()
        .collect();
    for target in &targets {
        assert_eq!(landing.page.style(*target, StyleProperty::Opacity), Some("0"));
        assert_eq!(
            landing.page.style(*target, StyleProperty::Transform),
            Some("translateY(30px)")
        );
        assert_eq!(
            landing.page.style(*target, StyleProperty::Transition),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );
        assert!(controller.scroll_reveal().watcher().is_observing(*target));
    }

    let watcher = controller.scroll_reveal().watcher();
    assert_eq!(watcher.len(), targets.len());
    assert_eq!(watcher.options().threshold, 0.1);
    assert_eq!(watcher.options().root_margin, "0px");
    assert_eq!(landing.page.stylesheets().len(), 1);
    assert!(landing.page.stylesheets()[0].contains(".animate-in"));
}

#[test]
fn reveal_happens_once_and_unsubscribes() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);
    let step = landing.steps[2];

    let first = controller.handle(&mut landing.page, &entering(step));
    assert_eq!(first.applied, 2);
    assert!(landing.page.has_class(step, REVEALED_CLASS));
    assert!(!controller.scroll_reveal().watcher().is_observing(step));

    let (_, effects) = controller.effects_for(&landing.page, &entering(step));
    assert!(effects.is_empty());
    let second = controller.handle(&mut landing.page, &entering(step));
    assert_eq!(second.applied, 0);
    assert!(landing.page.has_class(step, REVEALED_CLASS));
}

#[test]
fn leaving_entries_do_not_reveal() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);
    let card = landing.cards[0];

    controller.handle(
        &mut landing.page,
        &PageEvent::Intersection {
            watcher: REVEAL_WATCHER,
            entries: vec![IntersectionEntry::leaving(card)],
        },
    );

    assert!(!landing.page.has_class(card, REVEALED_CLASS));
    assert!(controller.scroll_reveal().watcher().is_observing(card));
}

#[test]
fn reveal_requests_host_unobserve() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);

    let (_, effects) = controller.effects_for(&landing.page, &entering(landing.vision));
    assert!(effects.contains(&Effect::Unobserve {
        watcher: REVEAL_WATCHER,
        target: landing.vision,
    }));
}

#[test]
fn groups_get_index_proportional_delays() {
    let mut landing = landing_page();
    attach(&mut landing);

    let step_delays: Vec<_> = landing
        .steps
        .iter()
        .map(|step| landing.page.style(*step, StyleProperty::TransitionDelay))
        .collect();
    assert_eq!(
        step_delays,
        vec![Some("0s"), Some("0.15s"), Some("0.3s"), Some("0.44999999999999996s")]
    );

    let card_delays: Vec<_> = landing
        .cards
        .iter()
        .map(|card| landing.page.style(*card, StyleProperty::TransitionDelay))
        .collect();
    assert_eq!(card_delays, vec![Some("0s"), Some("0.1s"), Some("0.2s")]);

    assert_eq!(
        landing.page.style(landing.vision, StyleProperty::TransitionDelay),
        None
    );
}
