use leptos::prelude::*;
use zephyr_choreo::rotation::AutoRotate;

use super::reveal::Reveal;
use super::use_site_config;
use crate::content::FEATURE_TABS;
use crate::platform::{BrowserScheduler, hold_until_unmount};

/// Four capability tabs that advance on their own; clicking a tab jumps to it
/// without restarting the timer.
#[component]
pub fn TabbedFeatures() -> impl IntoView {
    let period = use_site_config().tabs.period();
    let (active, set_active) = signal(0usize);

    let rotation = AutoRotate::start(
        BrowserScheduler::shared(),
        FEATURE_TABS.len(),
        period,
        "tabs",
        move |index| set_active.set(index),
    )
    .inspect_err(|err| tracing::warn!(%err, "tab auto-rotation disabled"))
    .ok();
    let rotation = hold_until_unmount(rotation);

    let select = move |index: usize| {
        rotation.with_value(|rotation| match rotation {
            Some(rotation) => {
                rotation.select(index);
            }
            None => set_active.set(index),
        });
    };

    view! {
        <section class="features">
            <div class="container">
                <Reveal>
                    <h2 class="section-title large">"Unparalleled BSS/OSS Capabilities"</h2>
                </Reveal>

                <div class="tab-bar" role="tablist">
                    {FEATURE_TABS
                        .iter()
                        .enumerate()
                        .map(|(index, tab)| {
                            let is_active = move || active.get() == index;
                            view! {
                                <button
                                    class="tab-button"
                                    class:active=is_active
                                    role="tab"
                                    aria-selected=move || is_active().to_string()
                                    on:click=move |_| select(index)
                                >
                                    {tab.label}
                                    <Show when=is_active>
                                        <span class="tab-indicator"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    let tab = &FEATURE_TABS[active.get()];
                    view! {
                        <div class="tab-panel" role="tabpanel">
                            <div class="tab-copy">
                                <h3 class="tab-title">{tab.title}</h3>
                                <p class="tab-body">{tab.body}</p>
                            </div>
                            <div class="tab-mockup">{tab.icon}</div>
                        </div>
                    }
                }}
            </div>
        </section>
    }
}
