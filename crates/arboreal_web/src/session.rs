//! Live page session: listeners and observers feeding the controller.
//!
//! # Responsibility
//! - Register every listener/observer the controller asks for.
//! - Translate DOM events into `PageEvent`s and apply the outcome.
//!
//! # Invariants
//! - One session per page, kept alive in a thread-local slot.
//! - Controller and page are never borrowed across callbacks.
//! - A failure wiring one behavior is logged and does not stop the others.

use crate::dom::DomPage;
use arboreal_core::{
    EventOutcome, IntersectionEntry, InteractionConfig, PageController, PageEvent, WatcherWiring,
    Wiring,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::Array;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

thread_local! {
    static SESSION: RefCell<Option<Rc<PageSession>>> = const { RefCell::new(None) };
}

pub struct PageSession {
    window: Window,
    page: RefCell<DomPage>,
    controller: RefCell<PageController>,
    listeners: RefCell<Vec<EventListener>>,
    observer_callbacks: RefCell<Vec<ObserverCallback>>,
}

impl PageSession {
    /// Attaches the controller to `document` and wires every behavior.
    ///
    /// A second call on the same page is ignored.
    pub fn start(window: Window, document: Document, config: &InteractionConfig) {
        if SESSION.with(|slot| slot.borrow().is_some()) {
            warn!("event=session_start module=web status=skipped reason=already_started");
            return;
        }

        let mut page = DomPage::new(window.clone(), document);
        let controller = PageController::attach(&mut page, config);
        let wiring = controller.wiring();

        let session = Rc::new(Self {
            window,
            page: RefCell::new(page),
            controller: RefCell::new(controller),
            listeners: RefCell::new(Vec::new()),
            observer_callbacks: RefCell::new(Vec::new()),
        });
        session.install_listeners(&wiring);
        for watcher in &wiring.watchers {
            if let Err(err) = session.install_observer(watcher) {
                warn!(
                    "event=observer_failed module=web status=error watcher={} error={:?}",
                    watcher.id, err
                );
            }
        }

        SESSION.with(|slot| *slot.borrow_mut() = Some(session));
    }

    fn dispatch(&self, event: PageEvent) -> EventOutcome {
        let (Ok(mut controller), Ok(mut page)) =
            (self.controller.try_borrow_mut(), self.page.try_borrow_mut())
        else {
            warn!("event=dispatch_skipped module=web reason=reentrant event={event:?}");
            return EventOutcome::default();
        };
        controller.handle(&mut *page, &event)
    }

    fn element(&self, id: arboreal_core::ElementId) -> Option<Element> {
        self.page.borrow().element(id)
    }

    fn install_listeners(self: &Rc<Self>, wiring: &Wiring) {
        let mut listeners = Vec::new();

        if let Some(toggle) = wiring.toggle.and_then(|id| self.element(id)) {
            let session = Rc::clone(self);
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                session.dispatch(PageEvent::ToggleClick);
            }));
        }

        for link_id in &wiring.menu_links {
            let Some(link) = self.element(*link_id) else {
                continue;
            };
            let session = Rc::clone(self);
            let link_id = *link_id;
            listeners.push(EventListener::new(&link, "click", move |_| {
                session.dispatch(PageEvent::MenuLinkClick(link_id));
            }));
        }

        if wiring.scroll {
            let session = Rc::clone(self);
            listeners.push(EventListener::new(&self.window, "scroll", move |_| {
                session.dispatch(PageEvent::Scroll);
            }));
        }

        for anchor_id in &wiring.anchors {
            let Some(anchor) = self.element(*anchor_id) else {
                continue;
            };
            let session = Rc::clone(self);
            let anchor_id = *anchor_id;
            listeners.push(EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    if session
                        .dispatch(PageEvent::AnchorClick(anchor_id))
                        .default_prevented
                    {
                        event.prevent_default();
                    }
                },
            ));
        }

        for leaf_id in &wiring.leaves {
            let Some(leaf) = self.element(*leaf_id) else {
                continue;
            };
            let leaf_id = *leaf_id;
            let session = Rc::clone(self);
            listeners.push(EventListener::new(&leaf, "mouseenter", move |_| {
                session.dispatch(PageEvent::PointerEnter(leaf_id));
            }));
            let session = Rc::clone(self);
            listeners.push(EventListener::new(&leaf, "mouseleave", move |_| {
                session.dispatch(PageEvent::PointerLeave(leaf_id));
            }));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    fn install_observer(self: &Rc<Self>, wiring: &WatcherWiring) -> Result<(), JsValue> {
        let session = Rc::clone(self);
        let watcher = wiring.id;
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                let entries = session.intersection_entries(&entries);
                if !entries.is_empty() {
                    session.dispatch(PageEvent::Intersection { watcher, entries });
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(wiring.options.threshold));
        options.set_root_margin(&wiring.options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for target in &wiring.targets {
            if let Some(element) = self.element(*target) {
                observer.observe(&element);
            }
        }
        self.page.borrow_mut().register_observer(watcher, observer);
        self.observer_callbacks.borrow_mut().push(callback);
        Ok(())
    }

    fn intersection_entries(&self, entries: &Array) -> Vec<IntersectionEntry> {
        let page = self.page.borrow();
        entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let target = page.id_of(&entry.target())?;
                Some(IntersectionEntry {
                    target,
                    is_intersecting: entry.is_intersecting(),
                })
            })
            .collect()
    }
}
