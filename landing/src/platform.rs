//! Browser bindings for the choreography core.
//!
//! [`BrowserScheduler`] maps the scheduler seam onto Leptos' timer helpers,
//! [`ElementVisibility`] onto an `IntersectionObserver`, and the scroll feed
//! onto one pair of window listeners per page. Registration failures are
//! logged and produce an inert guard; the page keeps rendering.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use zephyr_choreo::scroll::ScrollSample;
use zephyr_choreo::viewport::{EntryGate, GateAction, ReplayPolicy, VisibilitySource};
use zephyr_choreo::{Guard, Scheduler, SharedScheduler};

/// Scheduler backed by `setInterval`, `setTimeout` and `requestAnimationFrame`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl BrowserScheduler {
    pub fn shared() -> SharedScheduler {
        Rc::new(BrowserScheduler)
    }
}

impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Guard {
        let tick = RefCell::new(tick);
        let handle = set_interval_with_handle(
            move || {
                let mut tick = tick.borrow_mut();
                (*tick)();
            },
            period,
        );
        match handle {
            Ok(handle) => Guard::new(move || handle.clear()),
            Err(err) => {
                tracing::warn!(error = ?err, "setInterval failed");
                Guard::inert()
            }
        }
    }

    fn after(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Guard {
        match set_timeout_with_handle(fire, delay) {
            Ok(handle) => Guard::new(move || handle.clear()),
            Err(err) => {
                tracing::warn!(error = ?err, "setTimeout failed");
                Guard::inert()
            }
        }
    }

    fn frame(&self, fire: Box<dyn FnOnce(f64)>) -> Guard {
        match request_animation_frame_with_handle(move || fire(now_ms())) {
            Ok(handle) => Guard::new(move || handle.cancel()),
            Err(err) => {
                tracing::warn!(error = ?err, "requestAnimationFrame failed");
                Guard::inert()
            }
        }
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default()
}

/// Reports when one element enters or leaves the viewport.
pub struct ElementVisibility {
    element: Element,
    threshold: f64,
}

impl ElementVisibility {
    /// Any visible pixel counts as "in view".
    pub fn new(element: impl Into<Element>) -> Self {
        Self {
            element: element.into(),
            threshold: 0.0,
        }
    }

    /// Require `threshold` (0..=1) of the element to be visible.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

impl VisibilitySource for ElementVisibility {
    fn watch(&self, mut on_change: Box<dyn FnMut(bool)>) -> Guard {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&self.element);
                Guard::new(move || {
                    observer.disconnect();
                    drop(callback);
                })
            }
            Err(err) => {
                tracing::warn!(error = ?err, "IntersectionObserver unavailable");
                Guard::inert()
            }
        }
    }
}

/// Keep `value` alive until the current reactive owner is cleaned up.
///
/// Sessions and guards are `!Send`, so they go into local arena storage; the
/// owner disposes it on unmount, which drops the value and releases its
/// timers and listeners.
pub fn hold_until_unmount<T: 'static>(value: T) -> StoredValue<T, LocalStorage> {
    StoredValue::new_local(value)
}

/// Read-only page scroll geometry, published once per page.
#[derive(Clone, Copy)]
pub struct ScrollFeed(ReadSignal<ScrollSample>);

impl ScrollFeed {
    pub fn sample(&self) -> ScrollSample {
        self.0.get()
    }
}

/// Install the page's single scroll/resize publisher and provide it as
/// context. Sections read it through [`use_scroll_feed`].
pub fn provide_scroll_feed() -> ScrollFeed {
    let (sample, set_sample) = signal(read_scroll_sample());

    let refresh = move || set_sample.set(read_scroll_sample());
    let on_scroll = window_event_listener(ev::scroll, move |_| refresh());
    let on_resize = window_event_listener(ev::resize, move |_| refresh());
    hold_until_unmount(Guard::new(move || {
        on_scroll.remove();
        on_resize.remove();
    }));

    let feed = ScrollFeed(sample);
    provide_context(feed);
    feed
}

/// The page scroll feed, or a static top-of-page sample when none was
/// provided.
pub fn use_scroll_feed() -> ScrollFeed {
    use_context::<ScrollFeed>().unwrap_or_else(|| {
        tracing::warn!("no scroll feed provided, parallax disabled");
        ScrollFeed(signal(ScrollSample::default()).0)
    })
}

fn read_scroll_sample() -> ScrollSample {
    let Some(window) = web_sys::window() else {
        return ScrollSample::default();
    };
    let scroll_y = window.scroll_y().unwrap_or_default();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default();
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or_default();
    ScrollSample {
        scroll_y,
        viewport_height,
        document_height,
    }
}

/// Top of `element` relative to the viewport and its height, in pixels.
pub fn viewport_rect(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.height())
}

/// Flip a signal to `true` when the element behind `node` scrolls into view,
/// following `policy` for later exits and entries. Used by bars and headings
/// that animate in with CSS transitions.
pub fn reveal_on_entry(node: NodeRef<html::Div>, policy: ReplayPolicy) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let watch = hold_until_unmount(None::<Guard>);

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        let gate = RefCell::new(EntryGate::new(policy));
        let guard = ElementVisibility::new(element)
            .with_threshold(0.1)
            .watch(Box::new(move |visible| {
                match gate.borrow_mut().observe(visible) {
                    Some(GateAction::Play) => set_revealed.set(true),
                    Some(GateAction::Reset) => set_revealed.set(false),
                    None => {}
                }
            }));
        watch.set_value(Some(guard));
    });

    revealed
}
