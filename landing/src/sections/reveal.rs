use leptos::html;
use leptos::prelude::*;
use zephyr_choreo::viewport::ReplayPolicy;

use crate::platform::reveal_on_entry;

/// Fades and lifts its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let shown = reveal_on_entry(node, ReplayPolicy::Once);

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            class:is-revealed=move || shown.get()
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
