//! Inline style properties and transform values.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Inline style properties the controller writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    Opacity,
    Transform,
    Transition,
    TransitionDelay,
    BoxShadow,
}

impl StyleProperty {
    /// CSS property name as accepted by `CSSStyleDeclaration.setProperty`.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::TransitionDelay => "transition-delay",
            Self::BoxShadow => "box-shadow",
        }
    }
}

/// CSS transform values used by the page behaviors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Empty transform; clears any inline value.
    None,
    TranslateX(f64),
    TranslateY(f64),
    Scale(f64),
    /// `rotate(deg) translate(x, y)` used for the menu indicator bars.
    RotateTranslate { deg: f64, x: f64, y: f64 },
}

impl Transform {
    /// Renders the transform as inline CSS text.
    ///
    /// `Transform::None` renders as the empty string, which removes the
    /// inline property when applied.
    pub fn to_css(self) -> String {
        match self {
            Self::None => String::new(),
            Self::TranslateX(px) => format!("translateX({})", css_length(px)),
            Self::TranslateY(px) => format!("translateY({})", css_length(px)),
            Self::Scale(factor) => format!("scale({factor})"),
            Self::RotateTranslate { deg, x, y } => format!(
                "rotate({deg}deg) translate({}, {})",
                css_length(x),
                css_length(y)
            ),
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Formats a transition delay in seconds, e.g. `0.3s`.
pub fn css_seconds(seconds: f64) -> String {
    format!("{seconds}s")
}

fn css_length(px: f64) -> String {
    if px == 0.0 {
        "0".to_string()
    } else {
        format!("{px}px")
    }
}

#[cfg(test)]
mod tests {
    use super::{css_seconds, StyleProperty, Transform};

    #[test]
    fn renders_menu_bar_transforms() {
        let open = Transform::RotateTranslate {
            deg: 45.0,
            x: 5.0,
            y: 5.0,
        };
        assert_eq!(open.to_css(), "rotate(45deg) translate(5px, 5px)");

        let second = Transform::RotateTranslate {
            deg: -45.0,
            x: 1.0,
            y: -1.0,
        };
        assert_eq!(second.to_css(), "rotate(-45deg) translate(1px, -1px)");
    }

    #[test]
    fn zero_offsets_render_without_unit() {
        assert_eq!(Transform::TranslateX(0.0).to_css(), "translateX(0)");
        assert_eq!(Transform::TranslateY(30.0).to_css(), "translateY(30px)");
        assert_eq!(Transform::Scale(1.0).to_css(), "scale(1)");
        assert_eq!(Transform::None.to_css(), "");
    }

    #[test]
    fn seconds_and_property_names() {
        assert_eq!(css_seconds(0.0), "0s");
        assert_eq!(css_seconds(0.15), "0.15s");
        assert_eq!(StyleProperty::TransitionDelay.css_name(), "transition-delay");
        assert_eq!(StyleProperty::BoxShadow.css_name(), "box-shadow");
    }
}
