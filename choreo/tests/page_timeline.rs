//! End-to-end timelines for the landing page choreography.
//!
//! A miniature page host wires the loader, the two rotations and a counter to
//! one ManualClock the way the browser app wires them to real timers.
//! Developed by The Tech Zephyr Web Team (c)2026

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use zephyr_choreo::count_up::{CountUp, ViewportCountUp};
use zephyr_choreo::loader::{LoaderPhase, LoaderSession};
use zephyr_choreo::rotation::AutoRotate;
use zephyr_choreo::timing::{CounterTiming, LoaderTiming, RotationTiming};
use zephyr_choreo::{ManualClock, SharedScheduler};

/// Sections that only exist once the loader has finished.
struct MainContent {
    tabs: AutoRotate,
    carousel: AutoRotate,
    revenue: ViewportCountUp,
}

#[derive(Default)]
struct PageState {
    reveals: Cell<u32>,
    tab: Cell<usize>,
    slide: Cell<usize>,
    revenue: Cell<u64>,
    loader_phases: RefCell<Vec<LoaderPhase>>,
}

struct Page {
    _loader: LoaderSession,
    content: Rc<RefCell<Option<MainContent>>>,
    state: Rc<PageState>,
}

fn mount_content(scheduler: SharedScheduler, state: Rc<PageState>) -> MainContent {
    let tab_state = state.clone();
    let tabs = AutoRotate::start(
        scheduler.clone(),
        4,
        RotationTiming::tabs().period(),
        "tabs",
        move |index| tab_state.tab.set(index),
    )
    .unwrap();

    let slide_state = state.clone();
    let carousel = AutoRotate::start(
        scheduler.clone(),
        4,
        RotationTiming::carousel().period(),
        "carousel",
        move |index| slide_state.slide.set(index),
    )
    .unwrap();

    let counter = CounterTiming::default();
    let revenue = ViewportCountUp::new(
        scheduler,
        CountUp::new(2847, counter.duration()).unwrap(),
        counter.replay,
        move |value| state.revenue.set(value),
    );

    MainContent {
        tabs,
        carousel,
        revenue,
    }
}

fn mount_page(clock: &ManualClock) -> Page {
    let scheduler: SharedScheduler = Rc::new(clock.clone());
    let state = Rc::new(PageState::default());
    let content: Rc<RefCell<Option<MainContent>>> = Rc::new(RefCell::new(None));

    let phases = state.clone();
    let reveal_state = state.clone();
    let reveal_slot = content.clone();
    let reveal_scheduler = scheduler.clone();
    let loader = LoaderSession::start(
        scheduler,
        &LoaderTiming::default(),
        move |phase| phases.loader_phases.borrow_mut().push(phase),
        move || {
            reveal_state.reveals.set(reveal_state.reveals.get() + 1);
            let mounted = mount_content(reveal_scheduler, reveal_state.clone());
            *reveal_slot.borrow_mut() = Some(mounted);
        },
    )
    .unwrap();

    Page {
        _loader: loader,
        content,
        state,
    }
}

fn with_content<R>(page: &Page, f: impl FnOnce(&MainContent) -> R) -> R {
    let content = page.content.borrow();
    f(content.as_ref().expect("main content mounted"))
}

#[test]
fn main_content_appears_once_after_loader_duration() {
    let clock = ManualClock::new();
    let page = mount_page(&clock);

    clock.advance(Duration::from_millis(2299));
    assert_eq!(page.state.reveals.get(), 0);
    assert!(page.content.borrow().is_none());

    clock.advance(Duration::from_millis(1));
    assert_eq!(page.state.reveals.get(), 1);
    assert!(page.content.borrow().is_some());

    clock.advance(Duration::from_secs(120));
    assert_eq!(page.state.reveals.get(), 1);

    let phases = page.state.loader_phases.borrow();
    assert_eq!(phases.len(), 51);
    assert_eq!(phases[49], LoaderPhase::Completing);
    assert_eq!(phases[50], LoaderPhase::Hidden);
}

#[test]
fn clicking_second_tab_mid_cycle_then_auto_advancing() {
    let clock = ManualClock::new();
    let page = mount_page(&clock);
    clock.advance(LoaderTiming::default().until_complete());

    // Halfway through the first four-second cycle.
    clock.advance(Duration::from_millis(2000));
    with_content(&page, |content| content.tabs.select(1));
    assert_eq!(page.state.tab.get(), 1);

    // Four seconds after the click the auto-advance has moved on to index 2.
    clock.advance(Duration::from_millis(4000));
    assert_eq!(page.state.tab.get(), 2);
    assert_eq!(with_content(&page, |content| content.tabs.current()), 2);
}

#[test]
fn carousel_rotates_on_its_own_period() {
    let clock = ManualClock::new();
    let page = mount_page(&clock);
    clock.advance(LoaderTiming::default().until_complete());

    clock.advance(Duration::from_millis(6000 * 5));
    assert_eq!(page.state.slide.get(), 5 % 4);

    with_content(&page, |content| content.carousel.prev());
    assert_eq!(page.state.slide.get(), 0);
    with_content(&page, |content| content.carousel.prev());
    assert_eq!(page.state.slide.get(), 3);
}

#[test]
fn stats_counter_plays_when_scrolled_into_view() {
    let clock = ManualClock::new();
    let page = mount_page(&clock);
    clock.advance(LoaderTiming::default().until_complete());

    clock.advance(Duration::from_secs(10));
    assert_eq!(page.state.revenue.get(), 0);

    with_content(&page, |content| content.revenue.visibility_changed(true));
    clock.advance(Duration::from_secs(1));
    let halfway = page.state.revenue.get();
    assert!(halfway > 0 && halfway < 2847, "halfway value was {halfway}");

    clock.advance(Duration::from_secs(2));
    assert_eq!(page.state.revenue.get(), 2847);
}

#[test]
fn unmounting_the_page_releases_every_timer() {
    let clock = ManualClock::new();
    let page = mount_page(&clock);
    clock.advance(Duration::from_millis(2500));
    with_content(&page, |content| content.revenue.visibility_changed(true));
    clock.advance(Duration::from_millis(100));
    assert!(clock.pending() >= 3);

    drop(page);
    assert_eq!(clock.pending(), 0);

    clock.advance(Duration::from_secs(30));
    assert_eq!(clock.pending(), 0);
}

#[test]
fn unmounting_during_the_loader_never_reveals() {
    let clock = ManualClock::new();
    let page = mount_page(&clock);
    let state = page.state.clone();
    clock.advance(Duration::from_millis(1000));
    drop(page);
    clock.advance(Duration::from_secs(10));
    assert_eq!(state.reveals.get(), 0);
    assert_eq!(clock.pending(), 0);
}
