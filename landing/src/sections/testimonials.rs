use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{HEADLINE_STATS, testimonial_columns};
use crate::platform::use_scroll_feed;

/// Quote columns drifting upward at different speeds as the page scrolls.
#[component]
pub fn Testimonials() -> impl IntoView {
    let feed = use_scroll_feed();

    view! {
        <section class="testimonials">
            <div class="testimonials-pattern"></div>
            <div class="container testimonials-inner">
                <Reveal class="section-intro">
                    <div class="eyebrow">"CUSTOMER SUCCESS STORIES"</div>
                    <h2 class="section-title large">"Trusted by Industry Leaders"</h2>
                    <p class="section-lede">
                        "See how leading telecommunications companies are transforming their operations "
                        "with our BSS/OSS solutions"
                    </p>
                </Reveal>

                <div class="testimonial-columns">
                    {testimonial_columns()
                        .enumerate()
                        .map(|(col, (column, drift))| {
                            view! {
                                <div
                                    class="testimonial-column"
                                    style:transform=move || {
                                        format!("translateY({:.1}px)", drift.map(feed.sample().page_progress()))
                                    }
                                >
                                    {column
                                        .iter()
                                        .enumerate()
                                        .map(|(row, testimonial)| {
                                            let delay = (col * 100 + row * 200) as u32;
                                            view! {
                                                <Reveal class="testimonial-card" delay_ms=delay>
                                                    <div class="metric-badge">{testimonial.metric}</div>
                                                    <p class="testimonial-quote">
                                                        "\u{201C}"{testimonial.quote}"\u{201D}"
                                                    </p>
                                                    <div class="testimonial-author">
                                                        <div class="avatar">{testimonial.avatar}</div>
                                                        <div>
                                                            <div class="author-name">{testimonial.author}</div>
                                                            <div class="author-role">{testimonial.role}</div>
                                                            <div class="author-company">{testimonial.company}</div>
                                                        </div>
                                                    </div>
                                                </Reveal>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class="headline-stats" delay_ms=400>
                    {HEADLINE_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="headline-stat">
                                    <div class="headline-value">{stat.value}</div>
                                    <div class="headline-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
