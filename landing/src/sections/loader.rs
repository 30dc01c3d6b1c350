use leptos::prelude::*;
use zephyr_choreo::loader::{LoaderPhase, LoaderSession};
use zephyr_choreo::timing::LoaderTiming;

use crate::platform::{BrowserScheduler, hold_until_unmount};

/// Full-screen splash. Counts to 100%, spins in the mark, then calls
/// `on_complete` once and wipes itself away.
#[component]
pub fn Loader(timing: LoaderTiming, on_complete: Callback<()>) -> impl IntoView {
    let (phase, set_phase) = signal(LoaderPhase::Running { progress: 0 });
    let exit_ms = timing.exit().as_millis();

    let session = LoaderSession::start(
        BrowserScheduler::shared(),
        &timing,
        move |next| set_phase.set(next),
        move || on_complete.run(()),
    );
    match session {
        Ok(session) => {
            hold_until_unmount(session);
        }
        Err(err) => {
            tracing::warn!(%err, "loader timing rejected, revealing page immediately");
            set_phase.set(LoaderPhase::Hidden);
            on_complete.run(());
        }
    }

    view! {
        <div
            class="loader"
            class:is-hidden=move || !phase.get().is_covering()
            style=move || {
                format!("--loader-exit: {exit_ms}ms; clip-path: {}", overlay_clip(phase.get()))
            }
            aria-hidden=move || (!phase.get().is_covering()).to_string()
        >
            <div class="loader-track">
                <div
                    class="loader-fill"
                    style:transform=move || {
                        format!("scaleX({})", f64::from(phase.get().progress()) / 100.0)
                    }
                ></div>
            </div>
            <div class="loader-count">{move || format!("{}%", phase.get().progress())}</div>
            <Show when=move || !matches!(phase.get(), LoaderPhase::Running { .. })>
                <div class="loader-mark">
                    <div class="loader-mark-l"></div>
                </div>
            </Show>
        </div>
    }
}

/// Overlay clip for `phase`. Hiding collapses the overlay onto its left edge.
fn overlay_clip(phase: LoaderPhase) -> &'static str {
    if phase.is_covering() {
        "inset(0 0 0 0)"
    } else {
        "inset(0 100% 0 0)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlay_stays_whole_until_hidden() {
        assert_eq!(overlay_clip(LoaderPhase::Running { progress: 40 }), "inset(0 0 0 0)");
        assert_eq!(overlay_clip(LoaderPhase::Completing), "inset(0 0 0 0)");
    }

    #[test]
    fn hidden_overlay_collapses_to_the_left_edge() {
        assert_eq!(overlay_clip(LoaderPhase::Hidden), "inset(0 100% 0 0)");
    }
}
