//! Visual-state model shared by the controller and page hosts.
//!
//! # Responsibility
//! - Describe every presentational mutation as a plain value (`Effect`).
//! - Keep CSS text rendering in one place so hosts never format styles.
//!
//! # Invariants
//! - Effects are declarative; applying the same effect twice leaves the same
//!   visual state.
//! - `ElementId` values are only meaningful to the host that issued them.

pub mod effect;
pub mod style;
