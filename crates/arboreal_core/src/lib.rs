//! Interaction logic for the Arboreal landing page.
//! This crate decides every page behavior; hosts only deliver events and
//! apply the resulting effects.

pub mod config;
pub mod controller;
pub mod counter;
pub mod host;
pub mod logging;
pub mod model;
pub mod watch;

pub use config::{ConfigError, InteractionConfig, Selectors};
pub use controller::anchor::{fragment_id, AnchorOutcome};
pub use controller::menu::{MenuState, MENU_ACTIVE_CLASS};
pub use controller::reveal::REVEALED_CLASS;
pub use controller::{
    apply_effects, EventOutcome, PageController, PageEvent, Wiring, WatcherWiring,
    EXAMPLE_WATCHER, REVEAL_WATCHER,
};
pub use counter::{ease_out_quad, CounterAnimation, CounterFrame};
pub use host::memory::{ElementSpec, MemoryPage};
pub use host::{HostError, HostResult, PageHost};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{init_logging, logging_status};
pub use logging::{default_log_level, STARTUP_BANNER};
pub use model::effect::{Effect, ElementId};
pub use model::style::{StyleProperty, Transform};
pub use watch::{IntersectionEntry, IntersectionWatcher, WatcherId, WatcherOptions};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
