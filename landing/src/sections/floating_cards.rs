use leptos::prelude::*;

use crate::content::{FLOATING_CARD_COUNT, FloatingCardLayout};

/// Decorative glass cards behind the hero. `pointer` is the pointer offset
/// from the viewport centre in pixels.
#[component]
pub fn FloatingCards(pointer: ReadSignal<(f64, f64)>) -> impl IntoView {
    view! {
        <div class="floating-cards" aria-hidden="true">
            {(0..FLOATING_CARD_COUNT)
                .map(|index| {
                    let layout = FloatingCardLayout::for_index(index);
                    view! {
                        <div
                            class="floating-card"
                            style:left=format!("{}%", layout.left_pct)
                            style:top=format!("{}%", layout.top_pct)
                            style:animation-duration=format!("{}s", layout.float_period_s)
                            style:translate=move || {
                                let (dx, dy) = pointer.get();
                                let (x, y) = layout.offset(dx, dy);
                                format!("{x:.1}px {y:.1}px")
                            }
                        >
                            <div class="floating-card-line wide"></div>
                            <div class="floating-card-line three-quarter"></div>
                            <div class="floating-card-line half"></div>
                            <div class="floating-card-bars">
                                {(0..5).map(|_| view! { <div class="floating-card-bar"></div> }).collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
