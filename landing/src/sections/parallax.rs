use leptos::html;
use leptos::prelude::*;
use zephyr_choreo::scroll::{Mapping, Span, element_progress};

use super::reveal::Reveal;
use crate::platform::{use_scroll_feed, viewport_rect};

/// Background drifts from 0% to 50% of its height while the section passes
/// through the viewport.
const BACKDROP_DRIFT: Mapping = Mapping::from_progress(Span::new(0.0, 50.0));

#[component]
pub fn Parallax() -> impl IntoView {
    let feed = use_scroll_feed();
    let section = NodeRef::<html::Section>::new();

    let backdrop_offset = move || {
        let sample = feed.sample();
        let progress = section
            .get()
            .map(|element| {
                let (top, height) = viewport_rect(&element);
                element_progress(top, height, sample.viewport_height)
            })
            .unwrap_or_default();
        format!("translateY({:.2}%)", BACKDROP_DRIFT.map(progress))
    };

    view! {
        <section class="parallax" node_ref=section>
            <div class="parallax-backdrop" style:transform=backdrop_offset></div>
            <div class="parallax-shade"></div>
            <div class="container parallax-content">
                <Reveal>
                    <h2 class="parallax-title">"Experience the Future"</h2>
                </Reveal>
                <Reveal delay_ms=200>
                    <p class="parallax-copy">
                        "Advanced analytics and AI-powered insights that transform your business "
                        "operations with unprecedented efficiency and accuracy."
                    </p>
                </Reveal>
            </div>
        </section>
    }
}
