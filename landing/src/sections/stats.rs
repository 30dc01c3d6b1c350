use leptos::html;
use leptos::prelude::*;
use zephyr_choreo::Guard;
use zephyr_choreo::count_up::{CountUp, ViewportCountUp};

use super::reveal::Reveal;
use super::use_site_config;
use crate::content::{CHART_FILTERS, EMISSIONS_CHART, STAT_CARDS, StatCard};
use crate::platform::{BrowserScheduler, ElementVisibility, hold_until_unmount, reveal_on_entry};

#[component]
pub fn StatsAndGraph() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <div class="stats-block">
                    <Reveal>
                        <h2 class="section-title large dark">"Performance Metrics"</h2>
                    </Reveal>
                    <div class="stats-grid">
                        {STAT_CARDS
                            .iter()
                            .enumerate()
                            .map(|(index, stat)| view! { <StatCardView stat index /> })
                            .collect_view()}
                    </div>
                </div>
                <EmissionsChart />
            </div>
        </section>
    }
}

#[component]
fn StatCardView(stat: &'static StatCard, index: usize) -> impl IntoView {
    let replay = use_site_config().counter.replay;
    let bars = NodeRef::<html::Div>::new();
    let bars_shown = reveal_on_entry(bars, replay);

    view! {
        <Reveal class="stat-card" delay_ms={index as u32 * 200}>
            <h3 class="stat-title">{stat.title}</h3>
            <div class="stat-value">
                <AnimatedCounter target=stat.value />
            </div>
            <div class="stat-change">{stat.change_label}</div>
            <div class="stat-bars" node_ref=bars>
                {stat
                    .bar_widths
                    .iter()
                    .enumerate()
                    .map(|(i, width)| {
                        view! {
                            <div
                                class="stat-bar"
                                style:width=move || {
                                    if bars_shown.get() { format!("{width}%") } else { "0%".to_string() }
                                }
                                style:transition-delay=format!("{}ms", 500 + i * 100)
                            >
                                <div class="stat-bar-fill"></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}

/// Counts from 0 to `target` when scrolled into view.
#[component]
fn AnimatedCounter(target: u64) -> impl IntoView {
    let timing = use_site_config().counter;
    let (value, set_value) = signal(0u64);
    let anchor = NodeRef::<html::Span>::new();

    let counter = CountUp::new(target, timing.duration())
        .map(|count_up| {
            ViewportCountUp::new(BrowserScheduler::shared(), count_up, timing.replay, move |next| {
                set_value.set(next)
            })
        })
        .inspect_err(|err| {
            tracing::warn!(%err, target_value = target, "counter disabled, showing final value")
        })
        .ok();
    if counter.is_none() {
        set_value.set(target);
    }
    let counter = hold_until_unmount(counter);
    let watch = hold_until_unmount(None::<Guard>);

    Effect::new(move |_| {
        let Some(element) = anchor.get() else {
            return;
        };
        let source = ElementVisibility::new(element);
        let guard = counter.with_value(|counter| {
            counter.as_ref().map(|counter| counter.watch(&source))
        });
        watch.set_value(guard);
    });

    view! { <span node_ref=anchor>{move || value.get()}</span> }
}

#[component]
fn EmissionsChart() -> impl IntoView {
    let replay = use_site_config().counter.replay;
    let (filter, set_filter) = signal(0usize);
    let plot = NodeRef::<html::Div>::new();
    let plot_shown = reveal_on_entry(plot, replay);

    view! {
        <div class="chart-block">
            <Reveal>
                <h3 class="chart-title">"Embodied Carbon Emissions"</h3>
            </Reveal>
            <div class="chart-filters">
                {CHART_FILTERS
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <button
                                class="chart-filter"
                                class:selected=move || filter.get() == index
                                on:click=move |_| set_filter.set(index)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="chart-card">
                <div class="chart-plot" node_ref=plot>
                    {EMISSIONS_CHART
                        .iter()
                        .enumerate()
                        .map(|(i, bar)| {
                            view! {
                                <div class="chart-column">
                                    <div
                                        class="chart-bar"
                                        style:height=move || {
                                            if plot_shown.get() { format!("{}%", bar.value) } else { "0%".to_string() }
                                        }
                                        style:transition-delay=format!("{}ms", i * 100)
                                    ></div>
                                    <div class="chart-label">{bar.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
