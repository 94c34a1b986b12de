mod common;

use arboreal_core::{PageEvent, StyleProperty};
use common::{attach, landing_page};

#[test]
fn leaves_scale_on_hover_and_restore() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);
    let leaf = landing.leaves[1];

    assert_eq!(
        landing.page.style(leaf, StyleProperty::Transition),
        Some("transform 0.3s ease")
    );

    controller.handle(&mut landing.page, &PageEvent::PointerEnter(leaf));
    assert_eq!(
        landing.page.style(leaf, StyleProperty::Transform),
        Some("scale(1.2)")
    );

    controller.handle(&mut landing.page, &PageEvent::PointerLeave(leaf));
    assert_eq!(
        landing.page.style(leaf, StyleProperty::Transform),
        Some("scale(1)")
    );
    assert_eq!(
        landing.page.style(landing.leaves[0], StyleProperty::Transform),
        None
    );
}

#[test]
fn hover_on_non_leaf_is_ignored() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);

    let outcome = controller.handle(&mut landing.page, &PageEvent::PointerEnter(landing.hero));

    assert_eq!(outcome.applied, 0);
    assert_eq!(landing.page.style(landing.hero, StyleProperty::Transform), None);
}
