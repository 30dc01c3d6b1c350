use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::floating_cards::FloatingCards;
use super::preview::PreviewPanel;
use crate::content::{
    TITLE_WORDS, TRUSTED_BY, TitleWord, TooltipPlacement, tooltip_for, word_entry_delay_s,
};

#[component]
pub fn Hero() -> impl IntoView {
    let (pointer, set_pointer) = signal((0.0_f64, 0.0_f64));

    let track_pointer = move |ev: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let half = |size: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            size.ok().and_then(|v| v.as_f64()).unwrap_or_default() / 2.0
        };
        let dx = f64::from(ev.client_x()) - half(window.inner_width());
        let dy = f64::from(ev.client_y()) - half(window.inner_height());
        set_pointer.set((dx, dy));
    };

    view! {
        <section class="hero" on:mousemove=track_pointer>
            <FloatingCards pointer />

            <div class="hero-proof">
                <div class="container hero-proof-row">
                    <span class="hero-proof-label">"Trusted by leading companies:"</span>
                    <div class="hero-proof-names">
                        {TRUSTED_BY.iter().map(|name| view! { <span>{*name}</span> }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="hero-main">
                <div class="container hero-content">
                    <h1 class="hero-title">
                        {TITLE_WORDS
                            .iter()
                            .enumerate()
                            .map(|(index, word)| view! { <InteractiveWord word index /> })
                            .collect_view()}
                    </h1>
                    <p class="hero-subtitle">"Now with AI-insights"</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary">"Start 14-day free trial"</button>
                        <button class="btn btn-link">"See what we do →"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One title word. Interactive words with a known preview open a tooltip
/// while hovered; each word tracks its own hover state.
#[component]
fn InteractiveWord(word: &'static TitleWord, index: usize) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let tooltip = if word.interactive { tooltip_for(word.text) } else { None };
    let placement = TooltipPlacement::for_index(index);

    view! {
        <div class="hero-word-slot">
            <span
                class="hero-word"
                class:interactive=word.interactive
                style:animation-delay=format!("{:.1}s", word_entry_delay_s(index))
                on:mouseenter=move |_| {
                    if word.interactive {
                        set_hovered.set(true);
                    }
                }
                on:mouseleave=move |_| {
                    if word.interactive {
                        set_hovered.set(false);
                    }
                }
            >
                {word.text}
                {word
                    .interactive
                    .then(|| {
                        view! {
                            <span class="hero-word-underline" class:active=move || hovered.get()></span>
                        }
                    })}
            </span>
            {tooltip
                .map(|tooltip| {
                    view! {
                        <Show when=move || hovered.get()>
                            <div class=placement.panel_class() role="tooltip">
                                <div class="tooltip-card">
                                    <h4 class="tooltip-title">
                                        <span class="pulse-dot"></span>
                                        {tooltip.title}
                                    </h4>
                                    <p class="tooltip-description">{tooltip.description}</p>
                                    <PreviewPanel visual=tooltip.visual />
                                </div>
                                <div class=placement.arrow_class()></div>
                                <div class="tooltip-glow"></div>
                            </div>
                        </Show>
                    }
                })}
        </div>
    }
}
