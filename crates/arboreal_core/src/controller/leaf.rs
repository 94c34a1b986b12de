//! Hover scaling on decorative leaves.

use crate::model::effect::{Effect, ElementId};
use crate::model::style::{StyleProperty, Transform};

const LEAF_TRANSITION: &str = "transform 0.3s ease";

#[derive(Debug, Clone)]
pub struct LeafHover {
    leaves: Vec<ElementId>,
    scale: f64,
}

impl LeafHover {
    pub fn new(leaves: Vec<ElementId>, scale: f64) -> Self {
        Self { leaves, scale }
    }

    pub fn leaves(&self) -> &[ElementId] {
        &self.leaves
    }

    pub fn attach(&self) -> Vec<Effect> {
        self.leaves
            .iter()
            .map(|leaf| Effect::style(*leaf, StyleProperty::Transition, LEAF_TRANSITION))
            .collect()
    }

    pub fn on_enter(&self, leaf: ElementId) -> Option<Effect> {
        self.scaled(leaf, self.scale)
    }

    pub fn on_leave(&self, leaf: ElementId) -> Option<Effect> {
        self.scaled(leaf, 1.0)
    }

    fn scaled(&self, leaf: ElementId, factor: f64) -> Option<Effect> {
        self.leaves
            .contains(&leaf)
            .then(|| Effect::transform(leaf, Transform::Scale(factor)))
    }
}
