mod common;

use arboreal_core::{IntersectionEntry, PageEvent, StyleProperty, EXAMPLE_WATCHER};
use common::{attach, landing_page};

#[test]
fn items_start_hidden_with_staggered_delays() {
    let mut landing = landing_page();
    let controller = attach(&mut landing);

    for (index, item) in landing.examples.iter().enumerate() {
        assert_eq!(landing.page.style(*item, StyleProperty::Opacity), Some("0"));
        assert_eq!(
            landing.page.style(*item, StyleProperty::Transform),
            Some("translateX(-20px)")
        );
        assert_eq!(
            landing.page.style(*item, StyleProperty::Transition),
            Some("opacity 0.5s ease, transform 0.5s ease")
        );
        let expected_delay = format!("{}s", index as f64 * 0.15);
        assert_eq!(
            landing.page.style(*item, StyleProperty::TransitionDelay),
            Some(expected_delay.as_str())
        );
    }

    let watcher = controller
        .example_reveal()
        .watcher()
        .expect("example box is observed");
    assert_eq!(watcher.options().threshold, 0.3);
    assert!(watcher.is_observing(landing.example_box));
}

#[test]
fn one_box_entry_reveals_every_item_at_once() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);

    controller.handle(
        &mut landing.page,
        &PageEvent::Intersection {
            watcher: EXAMPLE_WATCHER,
            entries: vec![IntersectionEntry::entering(landing.example_box)],
        },
    );

    for item in &landing.examples {
        assert_eq!(landing.page.style(*item, StyleProperty::Opacity), Some("1"));
        assert_eq!(
            landing.page.style(*item, StyleProperty::Transform),
            Some("translateX(0)")
        );
    }
    assert!(controller.example_reveal().is_revealed());
    assert!(controller
        .example_reveal()
        .watcher()
        .expect("watcher kept")
        .is_empty());
}

#[test]
fn box_entry_below_threshold_keeps_items_hidden() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);

    controller.handle(
        &mut landing.page,
        &PageEvent::Intersection {
            watcher: EXAMPLE_WATCHER,
            entries: vec![IntersectionEntry::leaving(landing.example_box)],
        },
    );

    for item in &landing.examples {
        assert_eq!(landing.page.style(*item, StyleProperty::Opacity), Some("0"));
    }
    assert!(!controller.example_reveal().is_revealed());
}
