//! Interaction tuning and markup contract.
//!
//! # Responsibility
//! - Hold every selector and numeric constant the controller depends on.
//! - Parse optional JSON overrides and validate them before use.
//!
//! # Invariants
//! - `InteractionConfig::default()` always validates.
//! - Missing JSON fields fall back to defaults field by field.
//! - Thresholds stay within `[0, 1]`; delays and margins are non-negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Selectors for every element the controller wires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub nav_toggle: String,
    /// Indicator bars inside the toggle, queried relative to it.
    pub nav_toggle_bars: String,
    pub mobile_menu: String,
    /// Links inside the menu panel, queried relative to it.
    pub menu_links: String,
    pub steps: String,
    pub commitment_cards: String,
    /// Selector list for every scroll-revealed element.
    pub scroll_reveal: String,
    pub anchors: String,
    pub hero_gradient: String,
    pub example_items: String,
    pub example_box: String,
    pub leaves: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".nav".to_string(),
            nav_toggle: ".nav-toggle".to_string(),
            nav_toggle_bars: "span".to_string(),
            mobile_menu: ".mobile-menu".to_string(),
            menu_links: "a".to_string(),
            steps: ".step".to_string(),
            commitment_cards: ".commitment-card".to_string(),
            scroll_reveal: ".step, .commitment-card, .about-vision".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            hero_gradient: ".hero-gradient".to_string(),
            example_items: ".example-item".to_string(),
            example_box: ".example-box".to_string(),
            leaves: ".leaf".to_string(),
        }
    }
}

/// Full controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub selectors: Selectors,
    /// Scroll offset (px) above which the nav bar gets its shadow.
    pub nav_shadow_threshold_px: f64,
    pub nav_shadow: String,
    /// Gap (px) kept between the nav bar and an anchor target.
    pub anchor_margin_px: f64,
    pub parallax_factor: f64,
    pub reveal_threshold: f64,
    pub example_threshold: f64,
    /// Per-index transition delays, in seconds.
    pub step_stagger_s: f64,
    pub card_stagger_s: f64,
    pub example_stagger_s: f64,
    pub leaf_hover_scale: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            nav_shadow_threshold_px: 100.0,
            nav_shadow: "0 4px 20px rgba(26, 58, 47, 0.08)".to_string(),
            anchor_margin_px: 20.0,
            parallax_factor: 0.3,
            reveal_threshold: 0.1,
            example_threshold: 0.3,
            step_stagger_s: 0.15,
            card_stagger_s: 0.1,
            example_stagger_s: 0.15,
            leaf_hover_scale: 1.2,
        }
    }
}

impl InteractionConfig {
    /// Parses a JSON override document and validates the result.
    ///
    /// # Errors
    /// - `ConfigError::Parse` when the text is not valid JSON for this shape.
    /// - Any validation error from [`InteractionConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("nav", &self.selectors.nav),
            ("nav_toggle", &self.selectors.nav_toggle),
            ("nav_toggle_bars", &self.selectors.nav_toggle_bars),
            ("mobile_menu", &self.selectors.mobile_menu),
            ("menu_links", &self.selectors.menu_links),
            ("steps", &self.selectors.steps),
            ("commitment_cards", &self.selectors.commitment_cards),
            ("scroll_reveal", &self.selectors.scroll_reveal),
            ("anchors", &self.selectors.anchors),
            ("hero_gradient", &self.selectors.hero_gradient),
            ("example_items", &self.selectors.example_items),
            ("example_box", &self.selectors.example_box),
            ("leaves", &self.selectors.leaves),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptySelector(field));
            }
        }

        require_unit_interval("reveal_threshold", self.reveal_threshold)?;
        require_unit_interval("example_threshold", self.example_threshold)?;

        require_non_negative("nav_shadow_threshold_px", self.nav_shadow_threshold_px)?;
        require_non_negative("anchor_margin_px", self.anchor_margin_px)?;
        require_non_negative("step_stagger_s", self.step_stagger_s)?;
        require_non_negative("card_stagger_s", self.card_stagger_s)?;
        require_non_negative("example_stagger_s", self.example_stagger_s)?;

        require_finite("parallax_factor", self.parallax_factor)?;
        require_finite("leaf_hover_scale", self.leaf_hover_scale)?;
        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(field))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn require_unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ThresholdOutOfRange { field, value });
    }
    Ok(())
}

/// Configuration parse and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    EmptySelector(&'static str),
    ThresholdOutOfRange { field: &'static str, value: f64 },
    Negative { field: &'static str, value: f64 },
    NonFinite(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid interaction config: {message}"),
            Self::EmptySelector(field) => write!(f, "selector `{field}` must not be empty"),
            Self::ThresholdOutOfRange { field, value } => {
                write!(f, "`{field}` must be within [0, 1], got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "`{field}` must not be negative, got {value}")
            }
            Self::NonFinite(field) => write!(f, "`{field}` must be a finite number"),
        }
    }
}

impl Error for ConfigError {}
