// Tech Zephyr BSS/OSS Landing Page - Leptos 0.8 Edition
// Developed by The Tech Zephyr Web Team (c)2026

mod config;
mod content;
mod platform;
mod sections;
mod telemetry;

use config::SiteConfig;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::embedded();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    telemetry::init(&config.telemetry);
    if let Err(err) = &loaded {
        tracing::warn!(%err, "site.toml rejected, using built-in defaults");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let loader_timing = config.loader.clone();
    provide_context(config);
    platform::provide_scroll_feed();

    let (loaded, set_loaded) = signal(false);
    let reveal = Callback::new(move |_: ()| set_loaded.set(true));

    view! {
        <Loader timing=loader_timing on_complete=reveal />
        <Show when=move || loaded.get()>
            <main class="page-content">
                <Hero />
                <CustomerLogos />
                <TabbedFeatures />
                <Parallax />
                <StatsAndGraph />
                <Testimonials />
                <ShowcaseCarousel />
            </main>
            <Footer />
        </Show>
    }
}
