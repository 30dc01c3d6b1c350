use leptos::prelude::*;

use super::reveal::Reveal;
use super::use_site_config;
use crate::content::{LOGOS, marquee_track};

/// Endless logo strip. The track holds the list twice and slides left by one
/// list length per loop, so the wrap is seamless.
#[component]
pub fn CustomerLogos() -> impl IntoView {
    let marquee = use_site_config().marquee;
    let track_style = format!(
        "--marquee-duration: {}s; --marquee-travel: -{}px",
        marquee.duration_s,
        marquee.travel_px(LOGOS.len())
    );

    view! {
        <section class="logos">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Trusted by industry leaders"</h2>
                </Reveal>
            </div>
            <div class="logos-track" style=track_style>
                {marquee_track().map(|name| view! { <div class="logo-name">{name}</div> }).collect_view()}
            </div>
        </section>
    }
}
