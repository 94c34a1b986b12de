//! Frame-driven counter animation for stat figures.
//!
//! Each run re-queues itself with `requestAnimationFrame` until the eased
//! value reaches its end; there is no cancellation. Frames are written
//! through the run's own `DomPage` as text effects.

use crate::dom::DomPage;
use arboreal_core::{CounterAnimation, ElementId};
use gloo::render::{request_animation_frame, AnimationFrame};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

struct CounterRun {
    page: RefCell<DomPage>,
    target: ElementId,
    animation: CounterAnimation,
    frame: RefCell<Option<AnimationFrame>>,
}

/// Animates `element` text from `start` to `end` over `duration_ms`.
pub fn animate_value(element: Element, start: f64, end: f64, duration_ms: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let started_at = window
        .performance()
        .map_or(0.0, |performance| performance.now());

    let page = DomPage::new(window, document);
    let target = page.adopt(element);
    let run = Rc::new(CounterRun {
        page: RefCell::new(page),
        target,
        animation: CounterAnimation::new(start, end, duration_ms, started_at),
        frame: RefCell::new(None),
    });
    queue_frame(&run);
}

fn queue_frame(run: &Rc<CounterRun>) {
    let next = Rc::clone(run);
    let handle = request_animation_frame(move |timestamp| {
        next.frame.borrow_mut().take();
        let rendered = next
            .animation
            .render(&mut *next.page.borrow_mut(), next.target, timestamp);
        match rendered {
            Ok(false) => queue_frame(&next),
            Ok(true) => {}
            Err(err) => warn!("event=counter_frame_failed module=web status=error error={err}"),
        }
    });
    *run.frame.borrow_mut() = Some(handle);
}
