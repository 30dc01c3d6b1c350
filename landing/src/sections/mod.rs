// Landing page sections
// Developed by The Tech Zephyr Web Team (c)2026

mod features;
mod floating_cards;
mod footer;
mod hero;
mod loader;
mod logos;
mod parallax;
mod preview;
mod reveal;
mod showcase;
mod stats;
mod testimonials;

pub use features::TabbedFeatures;
pub use footer::Footer;
pub use hero::Hero;
pub use loader::Loader;
pub use logos::CustomerLogos;
pub use parallax::Parallax;
pub use showcase::ShowcaseCarousel;
pub use stats::StatsAndGraph;
pub use testimonials::Testimonials;

use leptos::prelude::*;

use crate::config::SiteConfig;

/// Configuration provided by `App`, or the defaults when rendered standalone.
fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
