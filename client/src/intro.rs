use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::RefCell;

use wc_bracket_shared::flag_gradient;
use wc_bracket_shared::intro::{IntroPhase, IntroSchedule, IntroTile, TimerSlot};
use wc_bracket_shared::morph::flag_key;

use crate::app::IntroPhaseState;
use crate::morph;

thread_local! {
    static INTRO_TIMERS: RefCell<TimerSlot<[Timeout; 2]>> =
        const { RefCell::new(TimerSlot::new()) };
}

/// Schedule `Showing -> Exiting -> Done`. Restarting drops (and so cancels)
/// any pending pair.
pub(crate) fn start_timers(phase: RwSignal<IntroPhase>, schedule: IntroSchedule) {
    let timers = schedule.transitions().map(|(at_ms, next)| {
        Timeout::new(at_ms, move || {
            let applied = phase.try_set(next).is_none();
            if applied && next == IntroPhase::Exiting {
                morph::play_flag_handoff();
            }
        })
    });
    INTRO_TIMERS.with(|slot| slot.borrow_mut().replace(timers));
}

pub(crate) fn cancel_timers() {
    INTRO_TIMERS.with(|slot| slot.borrow_mut().clear());
}

fn row_class(row: usize) -> String {
    let suffix = char::from(b'a' + (row % 26) as u8);
    format!("intro-flags-row row-{suffix}")
}

fn tile_style(tile: &IntroTile) -> String {
    format!(
        "background-image: {}; animation-delay: {};",
        flag_gradient(&tile.colors),
        tile.animation_delay()
    )
}

/// Full-screen opening sequence: flags ripple in from the center, then
/// fade out while the group cards take over.
#[component]
pub fn IntroOverlay(rows: Vec<Vec<IntroTile>>) -> impl IntoView {
    let IntroPhaseState(phase) = expect_context();
    let exiting = move || phase.get() != IntroPhase::Showing;

    let rows_view = rows
        .into_iter()
        .enumerate()
        .map(|(row, tiles)| {
            let tiles_view = tiles
                .into_iter()
                .map(|tile| {
                    view! {
                        <div
                            class="flag flag--wavy intro-flag-tile"
                            class:intro-flag-handoff=exiting
                            data-flag-key=flag_key(&tile.id)
                            style=tile_style(&tile)
                        />
                    }
                })
                .collect_view();
            view! { <div class=row_class(row)>{tiles_view}</div> }
        })
        .collect_view();

    view! {
        <div class="intro-overlay" class:is-exiting=exiting aria-hidden="true">
            <div class="intro-inner">
                <div class="intro-brand" class:is-fading=exiting>
                    <div class="intro-logo" aria-label="World Cup 2026">
                        <svg width="48" height="48" viewBox="0 0 48 48" fill="none">
                            <circle cx="24" cy="24" r="20" stroke="currentColor" stroke-width="2.5" opacity="0.5" />
                            <circle cx="24" cy="24" r="12" fill="currentColor" opacity="0.75" />
                        </svg>
                    </div>
                    <div class="intro-wordmark">"World Cup 2026"</div>
                </div>

                <h1 class="intro-title" class:is-fading=exiting>"The World Awaits"</h1>
                <p class="intro-subtitle" class:is-fading=exiting>
                    "48 nations, one trophy, infinite stories."
                </p>

                <div class="intro-flags intro-flags--wave">{rows_view}</div>
            </div>
        </div>
    }
}
