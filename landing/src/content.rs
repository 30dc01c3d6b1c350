//! Static page content and the small pure rules attached to it.
//!
//! Everything here is compile-time data. The sections only index into these
//! tables; nothing is created or destroyed at runtime.

use zephyr_choreo::scroll::{Mapping, Span};

// ============================================================================
// Hero
// ============================================================================

pub struct TitleWord {
    pub text: &'static str,
    pub interactive: bool,
}

pub const TITLE_WORDS: &[TitleWord] = &[
    TitleWord { text: "Create", interactive: false },
    TitleWord { text: "reports,", interactive: true },
    TitleWord { text: "forecasts,", interactive: true },
    TitleWord { text: "dashboards", interactive: true },
    TitleWord { text: "&", interactive: false },
    TitleWord { text: "consolidations", interactive: true },
];

pub const TRUSTED_BY: &[&str] = &["Capterra", "G2", "Xero", "QuickBooks"];

/// Seconds before title word `index` slides in.
pub fn word_entry_delay_s(index: usize) -> f64 {
    0.5 + index as f64 * 0.1
}

/// Which preview template a tooltip renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewVisual {
    Analytics,
    Forecast,
    LiveDashboard,
    DataPipeline,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub visual: PreviewVisual,
}

const TOOLTIPS: &[TooltipContent] = &[
    TooltipContent {
        key: "reports",
        title: "Advanced Reports",
        description: "Real-time analytics with custom dashboards",
        visual: PreviewVisual::Analytics,
    },
    TooltipContent {
        key: "forecasts",
        title: "Predictive Forecasts",
        description: "AI-powered predictions and trend analysis",
        visual: PreviewVisual::Forecast,
    },
    TooltipContent {
        key: "dashboards",
        title: "Interactive Dashboards",
        description: "Real-time monitoring and control panels",
        visual: PreviewVisual::LiveDashboard,
    },
    TooltipContent {
        key: "consolidations",
        title: "Data Consolidations",
        description: "Unified data integration and processing",
        visual: PreviewVisual::DataPipeline,
    },
];

/// Lowercase with punctuation removed: `"Reports,"` becomes `"reports"`.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Preview for a hero word, if it has one.
pub fn tooltip_for(word: &str) -> Option<&'static TooltipContent> {
    let key = normalize_word(word);
    TOOLTIPS.iter().find(|tooltip| tooltip.key == key)
}

/// Horizontal anchoring of a tooltip panel and its arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPlacement {
    Left,
    Center,
    RightAnchored,
}

impl TooltipPlacement {
    /// Static table keyed by the word's position in the title.
    pub fn for_index(index: usize) -> Self {
        match index {
            1 => TooltipPlacement::Left,
            5 => TooltipPlacement::RightAnchored,
            _ => TooltipPlacement::Center,
        }
    }

    pub fn panel_class(self) -> &'static str {
        match self {
            TooltipPlacement::Left => "tooltip tooltip-left",
            TooltipPlacement::Center => "tooltip tooltip-center",
            TooltipPlacement::RightAnchored => "tooltip tooltip-right",
        }
    }

    pub fn arrow_class(self) -> &'static str {
        match self {
            TooltipPlacement::Left => "tooltip-arrow arrow-left",
            TooltipPlacement::Center => "tooltip-arrow arrow-center",
            TooltipPlacement::RightAnchored => "tooltip-arrow arrow-right",
        }
    }
}

pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

pub const ANALYTICS_KPIS: &[Kpi] = &[
    Kpi { value: "2.4K", label: "Users", accent: "accent-blue" },
    Kpi { value: "$142K", label: "Revenue", accent: "accent-green" },
    Kpi { value: "8.7%", label: "Growth", accent: "accent-purple" },
];
pub const ANALYTICS_BARS: &[u8] = &[65, 78, 52, 84, 72, 91, 68, 85];
pub const DASHBOARD_BARS: &[u8] = &[45, 62, 38, 71, 54, 83, 67, 76, 59, 88];
pub const DASHBOARD_SERVICES: &[&str] = &["API", "DB", "Cache"];
pub const PIPELINE_SOURCES: &[&str] = &["DB", "API", "Files"];
pub const PIPELINE_OUTPUTS: usize = 8;
pub const CPU_USAGE_PCT: f64 = 72.0;
pub const FORECAST_CONFIDENCE_PIPS: usize = 4;
pub const FORECAST_TREND: &str =
    "M 2,28 Q 15,20 25,22 Q 35,18 45,16 Q 55,14 65,12 Q 75,10 85,8 Q 95,6 98,4";

// ============================================================================
// Floating background cards
// ============================================================================

pub const FLOATING_CARD_COUNT: usize = 6;

/// Largest pointer distance from the viewport centre that still moves a card.
const POINTER_REACH_PX: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingCardLayout {
    pub left_pct: f64,
    pub top_pct: f64,
    pub float_period_s: f64,
    pub pointer_x: Mapping,
    pub pointer_y: Mapping,
}

impl FloatingCardLayout {
    /// Card `index` of a 3-wide grid. Cards further along react less to the
    /// pointer and float more slowly.
    pub fn for_index(index: usize) -> Self {
        let i = index as f64;
        let reach = Span::new(-POINTER_REACH_PX, POINTER_REACH_PX);
        Self {
            left_pct: 10.0 + (index % 3) as f64 * 30.0,
            top_pct: 15.0 + (index / 3) as f64 * 35.0,
            float_period_s: 6.0 + i * 0.5,
            pointer_x: Mapping::new(reach, Span::new(-20.0 + i * 5.0, 20.0 - i * 5.0)),
            pointer_y: Mapping::new(reach, Span::new(-10.0 + i * 3.0, 10.0 - i * 3.0)),
        }
    }

    /// Card offset in pixels for a pointer at `(dx, dy)` from the viewport
    /// centre.
    pub fn offset(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.pointer_x.map(dx), self.pointer_y.map(dy))
    }
}

// ============================================================================
// Logos, tabs
// ============================================================================

pub const LOGOS: &[&str] = &[
    "OpenAI", "Brex", "Runway", "Anthropic", "Vercel", "Linear", "Notion", "Figma",
    "Stripe", "GitHub", "Discord", "Spotify", "Netflix", "Uber", "Airbnb", "Tesla",
];

/// The strip contents: every logo twice, so the loop seam is invisible.
pub fn marquee_track() -> impl Iterator<Item = &'static str> {
    LOGOS.iter().chain(LOGOS.iter()).copied()
}

pub struct FeatureTab {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
}

pub const FEATURE_TABS: &[FeatureTab] = &[
    FeatureTab {
        label: "BILLING",
        title: "Real-Time Convergent Billing",
        body: "Instantaneous, accurate billing across all services and product lines with advanced rating engines and flexible pricing models.",
        icon: "💳",
    },
    FeatureTab {
        label: "CHARGING",
        title: "Dynamic Charging Engine",
        body: "Real-time charging capabilities with complex rating scenarios, promotional pricing, and multi-currency support for global operations.",
        icon: "⚡",
    },
    FeatureTab {
        label: "CATALOG",
        title: "Product & Service Catalog",
        body: "Comprehensive catalog management with hierarchical product structures, bundling capabilities, and automated lifecycle management.",
        icon: "📋",
    },
    FeatureTab {
        label: "EVENTS",
        title: "Event Management System",
        body: "High-throughput event processing with real-time mediation, data validation, and intelligent routing for seamless operations.",
        icon: "🎯",
    },
];

// ============================================================================
// Stats and chart
// ============================================================================

pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub change_label: &'static str,
    pub bar_widths: [u8; 5],
}

pub const STAT_CARDS: &[StatCard] = &[
    StatCard {
        title: "Revenue Growth",
        value: 2847,
        change_label: "+12.5%",
        bar_widths: [85, 92, 78, 95, 88],
    },
    StatCard {
        title: "Active Users",
        value: 15632,
        change_label: "+8.2%",
        bar_widths: [75, 88, 92, 86, 94],
    },
    StatCard {
        title: "Conversion Rate",
        value: 94,
        change_label: "+15.3%",
        bar_widths: [82, 79, 85, 91, 89],
    },
];

pub struct ChartBar {
    pub label: &'static str,
    pub value: u8,
}

pub const EMISSIONS_CHART: &[ChartBar] = &[
    ChartBar { label: "Q1", value: 40 },
    ChartBar { label: "Q2", value: 65 },
    ChartBar { label: "Q3", value: 45 },
    ChartBar { label: "Q4", value: 80 },
    ChartBar { label: "Q5", value: 55 },
    ChartBar { label: "Q6", value: 90 },
];

pub const CHART_FILTERS: &[&str] = &["Type", "Status"];

// ============================================================================
// Testimonials
// ============================================================================

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub metric: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Tech Zephyr's BSS platform transformed our billing operations. We've seen 40% reduction in billing cycles and 99.9% accuracy.",
        author: "Michael Rodriguez",
        role: "VP Operations",
        company: "Global Telecom Solutions",
        avatar: "👨‍💼",
        metric: "40% faster billing",
    },
    Testimonial {
        quote: "The real-time convergent billing system handles our complex pricing models seamlessly. Best investment we've made.",
        author: "Sarah Chen",
        role: "CFO",
        company: "MetroNet Communications",
        avatar: "👩‍💼",
        metric: "99.9% accuracy",
    },
    Testimonial {
        quote: "Implementation took just 6 weeks. The team's expertise in BSS/OSS is unmatched in the industry.",
        author: "David Thompson",
        role: "CTO",
        company: "Fiber Solutions Inc",
        avatar: "👨‍💻",
        metric: "6-week deployment",
    },
    Testimonial {
        quote: "Revenue assurance improved by 35% within the first quarter. The analytics capabilities are phenomenal.",
        author: "Jennifer Wu",
        role: "Revenue Director",
        company: "NextGen Networks",
        avatar: "👩‍💻",
        metric: "35% revenue boost",
    },
    Testimonial {
        quote: "Customer satisfaction scores increased 25% after deploying their self-service portal. Outstanding results.",
        author: "Robert Kim",
        role: "Customer Experience Lead",
        company: "TeleConnect Corp",
        avatar: "👨‍💼",
        metric: "25% satisfaction increase",
    },
    Testimonial {
        quote: "The event processing engine handles millions of transactions daily without any performance issues.",
        author: "Maria Garcia",
        role: "IT Director",
        company: "Digital Communications",
        avatar: "👩‍💼",
        metric: "Million+ daily events",
    },
];

/// Upward drift of each testimonial column over the whole page scroll.
pub const COLUMN_DRIFT_PX: [f64; 3] = [-50.0, -100.0, -75.0];

/// Testimonials split into consecutive columns of two, paired with the
/// column's parallax mapping.
pub fn testimonial_columns() -> impl Iterator<Item = (&'static [Testimonial], Mapping)> {
    TESTIMONIALS
        .chunks(2)
        .zip(COLUMN_DRIFT_PX)
        .map(|(column, drift)| (column, Mapping::from_progress(Span::new(0.0, drift))))
}

pub struct HeadlineStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat { value: "500M+", label: "Events Processed Daily" },
    HeadlineStat { value: "99.99%", label: "System Uptime" },
    HeadlineStat { value: "50+", label: "Enterprise Clients" },
    HeadlineStat { value: "6 Weeks", label: "Average Deployment" },
];

// ============================================================================
// Showcase carousel
// ============================================================================

pub struct Solution {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub metric_label: &'static str,
}

pub const SOLUTIONS: &[Solution] = &[
    Solution {
        number: "01",
        title: "Convergent Billing Platform",
        subtitle: "Real-Time Rating & Billing",
        tags: &["Real-time", "Multi-service", "Cloud-native"],
        description: "Process millions of transactions with sub-second response times. Support complex rating scenarios across voice, data, SMS, and digital services.",
        features: &[
            "Real-time rating engine",
            "Multi-currency support",
            "Flexible pricing models",
            "Revenue assurance",
        ],
        metric_label: "500M+ transactions/day",
    },
    Solution {
        number: "02",
        title: "Customer Experience Hub",
        subtitle: "Self-Service & Digital Engagement",
        tags: &["Self-service", "Mobile-first", "Omnichannel"],
        description: "Empower customers with comprehensive self-service capabilities and seamless digital experiences across all touchpoints.",
        features: &[
            "Mobile-responsive portal",
            "Real-time account access",
            "Payment processing",
            "Service management",
        ],
        metric_label: "95% self-service adoption",
    },
    Solution {
        number: "03",
        title: "Analytics & Intelligence",
        subtitle: "AI-Powered Business Insights",
        tags: &["AI/ML", "Predictive", "Real-time"],
        description: "Transform raw data into actionable insights with advanced analytics, machine learning, and predictive modeling capabilities.",
        features: &[
            "Predictive analytics",
            "Churn prevention",
            "Revenue optimization",
            "Custom dashboards",
        ],
        metric_label: "40% improvement in KPIs",
    },
    Solution {
        number: "04",
        title: "Integration Platform",
        subtitle: "Enterprise Connectivity",
        tags: &["API-first", "Microservices", "Scalable"],
        description: "Seamlessly connect with existing systems through our robust API gateway and integration platform built for enterprise scale.",
        features: &[
            "RESTful APIs",
            "Message queuing",
            "Data synchronization",
            "Security protocols",
        ],
        metric_label: "99.99% uptime SLA",
    },
];

pub const MOCK_CHART_BARS: usize = 8;

/// Bar heights (percent, 20..100) of the decorative dashboard on slide
/// `slide`. Fixed per slide so revisiting a slide shows the same chart.
pub fn mock_chart_bars(slide: usize) -> [u8; MOCK_CHART_BARS] {
    let mut state = (slide as u32).wrapping_mul(0x9E37_79B9) ^ 0x2545_F491;
    let mut bars = [0u8; MOCK_CHART_BARS];
    for bar in &mut bars {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *bar = 20 + (state % 80) as u8;
    }
    bars
}

// ============================================================================
// Footer
// ============================================================================

pub const FOOTER_LINKS: &[&str] = &["Privacy", "Terms", "Contact"];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn product_nouns_have_previews() {
        for word in ["reports", "forecasts", "dashboards", "consolidations"] {
            assert!(tooltip_for(word).is_some(), "{word} should have a preview");
        }
        assert_eq!(tooltip_for("Reports,").map(|t| t.title), Some("Advanced Reports"));
        assert_eq!(
            tooltip_for("forecasts,").map(|t| t.visual),
            Some(PreviewVisual::Forecast)
        );
    }

    #[test]
    fn other_words_have_no_preview() {
        for word in ["Create", "&", "", "report", "dash", "invoices"] {
            assert_eq!(tooltip_for(word), None, "{word:?}");
        }
    }

    #[test]
    fn interactive_title_words_all_resolve() {
        for word in TITLE_WORDS.iter().filter(|word| word.interactive) {
            assert!(tooltip_for(word.text).is_some(), "{}", word.text);
        }
        assert_eq!(TITLE_WORDS.len(), 6);
    }

    #[test]
    fn placement_table() {
        let placements: Vec<_> = (0..TITLE_WORDS.len()).map(TooltipPlacement::for_index).collect();
        assert_eq!(
            placements,
            vec![
                TooltipPlacement::Center,
                TooltipPlacement::Left,
                TooltipPlacement::Center,
                TooltipPlacement::Center,
                TooltipPlacement::Center,
                TooltipPlacement::RightAnchored,
            ]
        );
    }

    #[test]
    fn floating_cards_form_a_three_wide_grid() {
        let layouts: Vec<_> = (0..FLOATING_CARD_COUNT)
            .map(|i| {
                let card = FloatingCardLayout::for_index(i);
                (card.left_pct, card.top_pct)
            })
            .collect();
        assert_eq!(
            layouts,
            vec![(10.0, 15.0), (40.0, 15.0), (70.0, 15.0), (10.0, 50.0), (40.0, 50.0), (70.0, 50.0)]
        );
        assert_eq!(FloatingCardLayout::for_index(3).float_period_s, 7.5);
    }

    #[test]
    fn floating_card_offsets_follow_the_pointer() {
        let first = FloatingCardLayout::for_index(0);
        assert_eq!(first.offset(-300.0, -300.0), (-20.0, -10.0));
        assert_eq!(first.offset(1000.0, 1000.0), (20.0, 10.0));

        let third = FloatingCardLayout::for_index(2);
        assert_eq!(third.offset(300.0, 300.0), (10.0, 4.0));
    }

    #[test]
    fn marquee_repeats_the_logo_list() {
        let track: Vec<_> = marquee_track().collect();
        assert_eq!(track.len(), 32);
        assert_eq!(&track[..16], &track[16..]);
    }

    #[test]
    fn testimonials_split_into_three_columns_of_two() {
        let columns: Vec<_> = testimonial_columns()
            .map(|(column, drift)| {
                (
                    column.iter().map(|t| t.author).collect::<Vec<_>>(),
                    drift.map(1.0),
                )
            })
            .collect();
        assert_eq!(
            columns,
            vec![
                (vec!["Michael Rodriguez", "Sarah Chen"], -50.0),
                (vec!["David Thompson", "Jennifer Wu"], -100.0),
                (vec!["Robert Kim", "Maria Garcia"], -75.0),
            ]
        );
    }

    #[test]
    fn mock_chart_is_stable_and_in_range() {
        for slide in 0..SOLUTIONS.len() {
            let bars = mock_chart_bars(slide);
            assert_eq!(bars, mock_chart_bars(slide));
            assert!(bars.iter().all(|height| (20..100).contains(height)));
        }
        assert_ne!(mock_chart_bars(0), mock_chart_bars(1));
    }

    #[test]
    fn fixed_record_counts() {
        assert_eq!(FEATURE_TABS.len(), 4);
        assert_eq!(SOLUTIONS.len(), 4);
        assert_eq!(STAT_CARDS.len(), 3);
        assert_eq!(LOGOS.len(), 16);
        assert_eq!(word_entry_delay_s(0), 0.5);
    }
}
