//! Mobile navigation menu.

use crate::model::effect::{Effect, ElementId};
use crate::model::style::Transform;

/// Class marking both the toggle control and the panel as open.
pub const MENU_ACTIVE_CLASS: &str = "active";

const OPEN_BAR_TRANSFORMS: [Transform; 2] = [
    Transform::RotateTranslate {
        deg: 45.0,
        x: 5.0,
        y: 5.0,
    },
    Transform::RotateTranslate {
        deg: -45.0,
        x: 1.0,
        y: -1.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Toggle control, menu panel and the bars forming the hamburger icon.
///
/// Only the first two bars are animated; a toggle with fewer bars animates
/// whichever are present.
#[derive(Debug, Clone)]
pub struct MenuToggle {
    toggle: ElementId,
    panel: ElementId,
    bars: Vec<ElementId>,
    links: Vec<ElementId>,
    state: MenuState,
}

impl MenuToggle {
    pub fn new(
        toggle: ElementId,
        panel: ElementId,
        bars: Vec<ElementId>,
        links: Vec<ElementId>,
    ) -> Self {
        Self {
            toggle,
            panel,
            bars: bars.into_iter().take(OPEN_BAR_TRANSFORMS.len()).collect(),
            links,
            state: MenuState::Closed,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle_element(&self) -> ElementId {
        self.toggle
    }

    pub fn links(&self) -> &[ElementId] {
        &self.links
    }

    pub fn is_link(&self, element: ElementId) -> bool {
        self.links.contains(&element)
    }

    /// Toggle-control click: flips open/closed.
    pub fn on_toggle_click(&mut self) -> Vec<Effect> {
        self.transition(self.state.flipped())
    }

    /// Menu-link click: always closes.
    pub fn on_link_click(&mut self) -> Vec<Effect> {
        self.transition(MenuState::Closed)
    }

    fn transition(&mut self, next: MenuState) -> Vec<Effect> {
        self.state = next;
        let open = next.is_open();
        let mut effects = vec![
            Effect::class(self.panel, MENU_ACTIVE_CLASS, open),
            Effect::class(self.toggle, MENU_ACTIVE_CLASS, open),
        ];
        for (bar, open_transform) in self.bars.iter().zip(OPEN_BAR_TRANSFORMS) {
            let transform = if open {
                open_transform
            } else {
                Transform::None
            };
            effects.push(Effect::transform(*bar, transform));
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuState, MenuToggle};
    use crate::model::effect::{Effect, ElementId};

    fn menu(bar_count: usize) -> MenuToggle {
        let bars = (0..bar_count).map(|i| ElementId(10 + i)).collect();
        MenuToggle::new(ElementId(1), ElementId(2), bars, vec![ElementId(3)])
    }

    #[test]
    fn only_first_two_bars_are_animated() {
        let mut menu = menu(3);
        let effects = menu.on_toggle_click();
        let touched = effects
            .iter()
            .filter(|effect| matches!(effect, Effect::SetStyle { .. }))
            .count();
        assert_eq!(touched, 2);
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn missing_bars_are_skipped() {
        let mut menu = menu(1);
        let effects = menu.on_toggle_click();
        assert_eq!(effects.len(), 3);
    }

    #[test]
    fn link_click_closes_from_any_state() {
        let mut menu = menu(2);
        menu.on_link_click();
        assert_eq!(menu.state(), MenuState::Closed);
        menu.on_toggle_click();
        menu.on_link_click();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(menu.is_link(ElementId(3)));
    }
}
