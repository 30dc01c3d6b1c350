use leptos::prelude::*;
use zephyr_choreo::rotation::AutoRotate;

use super::reveal::Reveal;
use super::use_site_config;
use crate::content::{SOLUTIONS, Solution, mock_chart_bars};
use crate::platform::{BrowserScheduler, hold_until_unmount};

enum Nav {
    Prev,
    Next,
    To(usize),
}

/// Solution slides advancing on their own, with arrows and dots for manual
/// navigation. Manual moves never reset the auto-advance cadence.
#[component]
pub fn ShowcaseCarousel() -> impl IntoView {
    let period = use_site_config().carousel.period();
    let (current, set_current) = signal(0usize);

    let rotation = AutoRotate::start(
        BrowserScheduler::shared(),
        SOLUTIONS.len(),
        period,
        "carousel",
        move |index| set_current.set(index),
    )
    .inspect_err(|err| tracing::warn!(%err, "carousel auto-advance disabled"))
    .ok();
    let rotation = hold_until_unmount(rotation);

    let navigate = move |nav: Nav| {
        rotation.with_value(|rotation| match (rotation, nav) {
            (Some(rotation), Nav::Prev) => {
                rotation.prev();
            }
            (Some(rotation), Nav::Next) => {
                rotation.next();
            }
            (Some(rotation), Nav::To(index)) => {
                rotation.select(index);
            }
            (None, Nav::Prev) => {
                set_current.update(|i| *i = (*i + SOLUTIONS.len() - 1) % SOLUTIONS.len())
            }
            (None, Nav::Next) => set_current.update(|i| *i = (*i + 1) % SOLUTIONS.len()),
            (None, Nav::To(index)) => set_current.set(index),
        });
    };

    view! {
        <section class="showcase">
            <div class="showcase-glow top"></div>
            <div class="showcase-glow bottom"></div>

            <div class="container">
                <Reveal class="section-intro">
                    <div class="eyebrow">"OUR SOLUTIONS"</div>
                    <h2 class="section-title large">"Enterprise-Grade BSS/OSS Solutions"</h2>
                    <p class="section-lede">
                        "Comprehensive platforms designed for telecommunications and digital service providers"
                    </p>
                </Reveal>

                {move || {
                    let index = current.get();
                    view! { <Slide solution=&SOLUTIONS[index] index /> }
                }}
            </div>

            <div class="showcase-dots">
                {(0..SOLUTIONS.len())
                    .map(|index| {
                        view! {
                            <button
                                class="showcase-dot"
                                class:active=move || current.get() == index
                                aria-label=format!("Show solution {}", index + 1)
                                on:click=move |_| navigate(Nav::To(index))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="showcase-arrow prev" aria-label="Previous solution" on:click=move |_| navigate(Nav::Prev)>
                "←"
            </button>
            <button class="showcase-arrow next" aria-label="Next solution" on:click=move |_| navigate(Nav::Next)>
                "→"
            </button>
        </section>
    }
}

#[component]
fn Slide(solution: &'static Solution, index: usize) -> impl IntoView {
    view! {
        <div class="slide">
            <div class="slide-copy">
                <div class="slide-heading">
                    <div class="slide-number">{solution.number}</div>
                    <div>
                        <h3 class="slide-title">{solution.title}</h3>
                        <p class="slide-subtitle">{solution.subtitle}</p>
                    </div>
                </div>
                <div class="slide-tags">
                    {solution.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
                <p class="slide-description">{solution.description}</p>
                <ul class="slide-features">
                    {solution
                        .features
                        .iter()
                        .map(|feature| view! { <li><span class="bullet"></span>{*feature}</li> })
                        .collect_view()}
                </ul>
                <div class="slide-metric">{solution.metric_label}</div>
            </div>

            <div class="slide-visual" aria-hidden="true">
                <div class="mock-dashboard">
                    <div class="mock-top">
                        <div class="mock-header">
                            <div class="mock-pill blue"></div>
                            <div class="mock-pill green"></div>
                        </div>
                        <div class="mock-tiles">
                            {(0..6).map(|_| view! { <div class="mock-tile"></div> }).collect_view()}
                        </div>
                    </div>
                    <div class="mock-chart">
                        {mock_chart_bars(index)
                            .into_iter()
                            .map(|height| view! { <div class="mock-bar" style:height=format!("{height}%")></div> })
                            .collect_view()}
                    </div>
                </div>
                <div class="mock-orb top"></div>
                <div class="mock-orb bottom"></div>
            </div>
        </div>
    }
}
