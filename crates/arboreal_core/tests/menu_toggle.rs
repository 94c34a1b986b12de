mod common;

use arboreal_core::{MenuState, PageEvent, StyleProperty, MENU_ACTIVE_CLASS};
use common::{attach, landing_page};

#[test]
fn open_state_follows_click_parity() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);

    for clicks in 1..=6 {
        controller.handle(&mut landing.page, &PageEvent::ToggleClick);
        let open = clicks % 2 == 1;

        assert_eq!(controller.menu_state().expect("menu wired").is_open(), open);
        assert_eq!(landing.page.has_class(landing.menu, MENU_ACTIVE_CLASS), open);
        assert_eq!(landing.page.has_class(landing.toggle, MENU_ACTIVE_CLASS), open);
        for bar in &landing.bars[..2] {
            let transform = landing.page.style(*bar, StyleProperty::Transform);
            assert_eq!(transform.is_some(), open, "after {clicks} clicks");
        }
    }
}

#[test]
fn open_menu_draws_an_x() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);

    controller.handle(&mut landing.page, &PageEvent::ToggleClick);

    assert_eq!(
        landing.page.style(landing.bars[0], StyleProperty::Transform),
        Some("rotate(45deg) translate(5px, 5px)")
    );
    assert_eq!(
        landing.page.style(landing.bars[1], StyleProperty::Transform),
        Some("rotate(-45deg) translate(1px, -1px)")
    );
    assert_eq!(landing.page.style(landing.bars[2], StyleProperty::Transform), None);
}

#[test]
fn menu_link_click_always_closes() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);
    let link = landing.menu_links[1];

    controller.handle(&mut landing.page, &PageEvent::MenuLinkClick(link));
    assert_eq!(controller.menu_state(), Some(MenuState::Closed));

    controller.handle(&mut landing.page, &PageEvent::ToggleClick);
    controller.handle(&mut landing.page, &PageEvent::MenuLinkClick(link));

    assert_eq!(controller.menu_state(), Some(MenuState::Closed));
    assert!(!landing.page.has_class(landing.menu, MENU_ACTIVE_CLASS));
    assert!(!landing.page.has_class(landing.toggle, MENU_ACTIVE_CLASS));
    assert_eq!(landing.page.style(landing.bars[0], StyleProperty::Transform), None);
    assert_eq!(landing.page.style(landing.bars[1], StyleProperty::Transform), None);
}

#[test]
fn link_outside_menu_does_not_close_it() {
    let mut landing = landing_page();
    let mut controller = attach(&mut landing);

    controller.handle(&mut landing.page, &PageEvent::ToggleClick);
    controller.handle(
        &mut landing.page,
        &PageEvent::MenuLinkClick(landing.anchor_section1),
    );

    assert_eq!(controller.menu_state(), Some(MenuState::Open));
}
