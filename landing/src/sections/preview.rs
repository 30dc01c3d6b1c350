//! Mock product visuals shown inside the hero tooltips.

use leptos::prelude::*;

use crate::content::{
    ANALYTICS_BARS, ANALYTICS_KPIS, CPU_USAGE_PCT, DASHBOARD_BARS, DASHBOARD_SERVICES,
    FORECAST_CONFIDENCE_PIPS, FORECAST_TREND, PIPELINE_OUTPUTS, PIPELINE_SOURCES, PreviewVisual,
};

/// Circumference of the CPU gauge ring (r = 12).
const GAUGE_CIRCUMFERENCE: f64 = 75.4;

#[component]
pub fn PreviewPanel(visual: PreviewVisual) -> impl IntoView {
    let body = match visual {
        PreviewVisual::Analytics => analytics().into_any(),
        PreviewVisual::Forecast => forecast().into_any(),
        PreviewVisual::LiveDashboard => live_dashboard().into_any(),
        PreviewVisual::DataPipeline => data_pipeline().into_any(),
    };
    view! { <div class="preview">{body}</div> }
}

fn grow_bars(heights: &'static [u8], step_ms: u32, class: &'static str) -> impl IntoView {
    heights
        .iter()
        .enumerate()
        .map(|(i, height)| {
            view! {
                <div
                    class=class
                    style:height=format!("{height}%")
                    style:animation-delay=format!("{}ms", i as u32 * step_ms)
                ></div>
            }
        })
        .collect_view()
}

fn analytics() -> impl IntoView {
    view! {
        <div class="preview-header">
            <span class="preview-heading"><span class="pulse-dot blue"></span>"Analytics Dashboard"</span>
            <span class="preview-badge green">"95.2%"</span>
        </div>
        <div class="preview-grid three">
            {ANALYTICS_KPIS
                .iter()
                .map(|kpi| {
                    view! {
                        <div class="preview-tile">
                            <div class=format!("kpi-accent {}", kpi.accent)></div>
                            <div class="kpi-value">{kpi.value}</div>
                            <div class="kpi-label">{kpi.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="preview-chart">
            <div class="preview-bars">{grow_bars(ANALYTICS_BARS, 100, "preview-bar blue")}</div>
            <span class="preview-chart-tag">"Real-time"</span>
        </div>
    }
}

fn forecast() -> impl IntoView {
    view! {
        <div class="preview-header">
            <span class="preview-heading"><span class="pulse-dot green"></span>"Forecast Engine"</span>
            <span class="preview-badge green">"↗ +12.5%"</span>
        </div>
        <div class="preview-grid two">
            <div class="preview-tile">
                <div class="kpi-label">"Next Quarter"</div>
                <div class="kpi-value">"$186K"</div>
                <div class="meter"><div class="meter-fill green" style:width="78%"></div></div>
            </div>
            <div class="preview-tile">
                <div class="kpi-label">"Confidence"</div>
                <div class="kpi-value">"94.2%"</div>
                <div class="pips">
                    {(0..5)
                        .map(|i| view! { <div class="pip" class:on={i < FORECAST_CONFIDENCE_PIPS}></div> })
                        .collect_view()}
                </div>
            </div>
        </div>
        <div class="preview-chart">
            <svg class="trend" viewBox="0 0 100 32">
                <defs>
                    <linearGradient id="forecastGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#10B981" stop-opacity="0.1"></stop>
                        <stop offset="100%" stop-color="#10B981" stop-opacity="0.3"></stop>
                    </linearGradient>
                </defs>
                <path class="trend-area" d=format!("{FORECAST_TREND} L 98,32 L 2,32 Z") fill="url(#forecastGradient)"></path>
                <path class="trend-line" d=FORECAST_TREND stroke="#10B981" stroke-width="2" fill="none"></path>
            </svg>
            <span class="preview-chart-tag">"AI Predicted"</span>
        </div>
    }
}

fn live_dashboard() -> impl IntoView {
    let filled = GAUGE_CIRCUMFERENCE * CPU_USAGE_PCT / 100.0;
    view! {
        <div class="preview-header">
            <span class="preview-heading"><span class="pulse-dot purple"></span>"Live Dashboard"</span>
            <span class="traffic-lights">
                <span class="light green"></span>
                <span class="light yellow"></span>
                <span class="light red"></span>
            </span>
        </div>
        <div class="preview-grid two">
            <div class="preview-tile">
                <div class="kpi-label">"CPU Usage"</div>
                <div class="gauge">
                    <svg viewBox="0 0 32 32">
                        <circle cx="16" cy="16" r="12" stroke="#475569" stroke-width="4" fill="none"></circle>
                        <circle
                            class="gauge-arc"
                            cx="16"
                            cy="16"
                            r="12"
                            stroke="#8B5CF6"
                            stroke-width="4"
                            fill="none"
                            stroke-dasharray=format!("{filled:.2} {GAUGE_CIRCUMFERENCE}")
                        ></circle>
                    </svg>
                    <span class="gauge-label">{format!("{CPU_USAGE_PCT:.0}%")}</span>
                </div>
            </div>
            <div class="preview-tile">
                <div class="kpi-label">"System Status"</div>
                {DASHBOARD_SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="status-row">
                                <span>{*service}</span>
                                <span class="light green"></span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
        <div class="preview-chart short">
            <div class="preview-bars">{grow_bars(DASHBOARD_BARS, 50, "preview-bar purple")}</div>
        </div>
    }
}

fn data_pipeline() -> impl IntoView {
    view! {
        <div class="preview-header">
            <span class="preview-heading"><span class="pulse-dot orange"></span>"Data Pipeline"</span>
            <span class="preview-badge orange">"Processing"</span>
        </div>
        <div class="kpi-label">"Sources"</div>
        <div class="pipeline-sources">
            {PIPELINE_SOURCES
                .iter()
                .enumerate()
                .map(|(i, source)| {
                    view! {
                        <span class="pipeline-source" style:animation-delay=format!("{}ms", i * 100)>
                            {*source}
                        </span>
                    }
                })
                .collect_view()}
        </div>
        <div class="pipeline-flow">
            <div class="pipeline-line"></div>
            <div class="pipeline-engine">"ETL"</div>
            <div class="pipeline-line late"></div>
        </div>
        <div class="pipeline-outputs">
            {(0..PIPELINE_OUTPUTS)
                .map(|i| {
                    view! {
                        <div class="pipeline-output" style:animation-delay=format!("{}ms", 1000 + i * 50)></div>
                    }
                })
                .collect_view()}
        </div>
        <div class="preview-footnote">"Unified Data Lake"</div>
    }
}
