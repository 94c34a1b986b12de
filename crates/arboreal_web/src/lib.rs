//! Browser entry points for the Arboreal landing page.
//!
//! # Responsibility
//! - Start the page controller once the document structure is parsed.
//! - Expose the counter animation hook and version check to page scripts.
//!
//! # Invariants
//! - Exported functions never panic across the wasm boundary.
//! - Startup failures degrade to "no interactivity", never to a broken page.

mod console;
mod counter;
mod dom;
mod session;

use arboreal_core::{default_log_level, InteractionConfig};
use gloo::events::EventListener;
use log::{info, warn};
use session::PageSession;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, Window};

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "arboreal-config";

/// `document.readyState` while the parser is still running.
const READY_STATE_LOADING: &str = "loading";

/// Module start hook: waits for `DOMContentLoaded` when still parsing.
#[wasm_bindgen(start)]
pub fn run() {
    if let Err(err) = console::init_console_logging(default_log_level()) {
        web_sys::console::warn_1(&err.into());
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if still_parsing(&document.ready_state()) {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            boot(window, document);
        })
        .forget();
    } else {
        boot(window, document);
    }
}

/// Animates `element`'s text content from `start` to `end`.
#[wasm_bindgen(js_name = animateValue)]
pub fn animate_value(element: Element, start: f64, end: f64, duration_ms: f64) {
    counter::animate_value(element, start, end, duration_ms);
}

#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    arboreal_core::core_version().to_owned()
}

fn still_parsing(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

fn boot(window: Window, document: Document) {
    let config = load_config(&document);
    PageSession::start(window, document, &config);
    info!(
        "event=page_ready module=web status=ok version={}",
        arboreal_core::core_version()
    );
}

fn load_config(document: &Document) -> InteractionConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return InteractionConfig::default();
    };
    parse_config(&raw)
}

fn parse_config(raw: &str) -> InteractionConfig {
    if raw.trim().is_empty() {
        return InteractionConfig::default();
    }
    InteractionConfig::from_json_str(raw).unwrap_or_else(|err| {
        warn!("event=config_rejected module=web status=fallback error={err}");
        InteractionConfig::default()
    })
}
