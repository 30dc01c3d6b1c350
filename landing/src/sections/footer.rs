use leptos::prelude::*;

use crate::content::FOOTER_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <h3 class="footer-brand">"Tech Zephyr"</h3>
                <p class="footer-tagline">"Transforming businesses with AI-powered solutions"</p>
                <nav class="footer-links">
                    {FOOTER_LINKS.iter().map(|label| view! { <a href="#">{*label}</a> }).collect_view()}
                </nav>
                <div class="footer-copyright">"© 2024 Tech Zephyr. All rights reserved."</div>
            </div>
        </footer>
    }
}
