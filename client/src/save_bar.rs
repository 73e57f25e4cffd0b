use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::RefCell;

use wc_bracket_shared::DraftStore;
use wc_bracket_shared::config::SAVE_CONFIRM_MS;
use wc_bracket_shared::intro::TimerSlot;

use crate::app::{DraftState, SavedName};
use crate::storage::BrowserStore;

thread_local! {
    static CONFIRM_TIMEOUT: RefCell<TimerSlot<Timeout>> = const { RefCell::new(TimerSlot::new()) };
}

fn cancel_confirm_timeout() {
    CONFIRM_TIMEOUT.with(|slot| slot.borrow_mut().clear());
}

fn progress_summary(total: usize) -> String {
    format!("of {total} groups predicted")
}

/// Progress readout plus the name field that stamps whose picks these are.
#[component]
pub fn SaveBar() -> impl IntoView {
    let DraftState(draft) = expect_context();
    let SavedName(saved_name) = expect_context();

    let name_input: RwSignal<String> =
        RwSignal::new(saved_name.get_untracked().unwrap_or_default());
    let confirming: RwSignal<bool> = RwSignal::new(false);
    let progress = Memo::new(move |_| draft.with(|d| (d.completion_count(), d.total_groups())));

    let save = move || {
        let Some(clean) = DraftStore::new(BrowserStore).save_name(&name_input.get_untracked())
        else {
            return;
        };
        name_input.set(clean.clone());
        saved_name.set(Some(clean));
        confirming.set(true);

        cancel_confirm_timeout();
        let timeout = Timeout::new(SAVE_CONFIRM_MS, move || {
            confirming.try_set(false);
        });
        CONFIRM_TIMEOUT.with(|slot| slot.borrow_mut().replace(timeout));
    };

    on_cleanup(cancel_confirm_timeout);

    let disabled = move || name_input.with(|n| n.trim().is_empty()) || confirming.get();

    view! {
        <div class="savebar-shell">
            <div class="savebar">
                <div class="savebar-left">
                    <span class="savebar-dot" aria-hidden="true" />
                    <span class="savebar-text">
                        <strong>{move || progress.get().0}</strong>
                        " "
                        {move || progress_summary(progress.get().1)}
                    </span>
                </div>

                <div class="savebar-right">
                    <input
                        type="text"
                        class="savebar-input"
                        placeholder="Enter your name to save"
                        prop:value=move || name_input.get()
                        on:input=move |ev| name_input.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                save();
                            }
                        }
                    />
                    <button class="savebar-btn" disabled=disabled on:click=move |_| save()>
                        {move || if confirming.get() { "Saved" } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
