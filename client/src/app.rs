use leptos::prelude::*;

use wc_bracket_shared::intro::{IntroPhase, IntroSchedule, reference_intro};
use wc_bracket_shared::{Draft, DraftStore, DragGesture, OverlayMenu, ReferenceDataset};

use crate::group_card::GroupCard;
use crate::intro::{self, IntroOverlay};
use crate::playoff_menu::{self, PlayoffMenu};
use crate::save_bar::SaveBar;
use crate::storage::BrowserStore;

/// Newtype wrappers so each `RwSignal` gets a distinct context type.
#[derive(Clone, Copy)]
pub(crate) struct DraftState(pub RwSignal<Draft>);
#[derive(Clone, Copy)]
pub(crate) struct DragState(pub RwSignal<DragGesture>);
#[derive(Clone, Copy)]
pub(crate) struct MenuState(pub RwSignal<OverlayMenu>);
#[derive(Clone, Copy)]
pub(crate) struct SavedName(pub RwSignal<Option<String>>);
#[derive(Clone, Copy)]
pub(crate) struct IntroPhaseState(pub RwSignal<IntroPhase>);

fn load_reference() -> ReferenceDataset {
    match ReferenceDataset::bundled() {
        Ok(reference) => reference,
        Err(e) => {
            web_sys::console::warn_1(&format!("Bundled team data is unreadable: {e}").into());
            ReferenceDataset::default()
        }
    }
}

fn load_draft(reference: &ReferenceDataset) -> Draft {
    let Some((draft, report)) = DraftStore::new(BrowserStore).load_with_report(reference) else {
        return reference.draft();
    };
    if !report.rejected.is_empty() {
        web_sys::console::warn_1(
            &format!(
                "Ignoring stored picks for group(s) {}",
                report.rejected.join(", ")
            )
            .into(),
        );
    }
    if !report.restored.is_empty() {
        web_sys::console::info_1(&format!("restored_groups={}", report.restored.len()).into());
    }
    draft
}

/// Root application component. Provides the draft and UI state via context.
#[component]
pub fn App() -> impl IntoView {
    let reference = load_reference();
    let store = DraftStore::new(BrowserStore);

    let draft: RwSignal<Draft> = RwSignal::new(load_draft(&reference));
    let saved_name: RwSignal<Option<String>> = RwSignal::new(store.load_name());
    let drag: RwSignal<DragGesture> = RwSignal::new(DragGesture::default());
    let menu: RwSignal<OverlayMenu> = RwSignal::new(OverlayMenu::new());
    let intro_phase: RwSignal<IntroPhase> = RwSignal::new(IntroPhase::Showing);

    provide_context(DraftState(draft));
    provide_context(DragState(drag));
    provide_context(MenuState(menu));
    provide_context(SavedName(saved_name));
    provide_context(IntroPhaseState(intro_phase));

    // Persist after every mutation (and once on mount).
    Effect::new(move || {
        draft.with(|draft| {
            if let Err(e) = DraftStore::new(BrowserStore).save(draft) {
                web_sys::console::warn_1(&format!("Failed to serialize draft: {e}").into());
            }
        });
    });

    // Document listeners follow the open/closed state of the single menu.
    let menu_open = Memo::new(move |_| menu.with(OverlayMenu::is_open));
    Effect::new(move || {
        playoff_menu::sync_listeners(menu, menu_open.get());
    });

    intro::start_timers(intro_phase, IntroSchedule::default());

    on_cleanup(|| {
        intro::cancel_timers();
        playoff_menu::release_listeners();
    });

    let intro_rows = reference_intro(&reference);
    let letters: Vec<String> = reference.defaults().letters().map(str::to_string).collect();

    let intro_visible = move || intro_phase.get() != IntroPhase::Done;
    let content_visible = move || intro_phase.get() != IntroPhase::Showing;

    view! {
        <div class="wc-page">
            <Show when=intro_visible>
                <IntroOverlay rows=intro_rows.clone() />
            </Show>

            <div class="page-content" class:is-visible=content_visible>
                <div class="page-inner">
                    <section class="hero">
                        <div class="step-chip">
                            <svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path d="M8 1L10.5 6L16 6.75L12 10.5L13 16L8 13.25L3 16L4 10.5L0 6.75L5.5 6L8 1Z" fill="currentColor" />
                            </svg>
                            "World Cup 2026 Group Stage"
                        </div>
                        <h1 class="hero-title">"Predict the Group Standings"</h1>
                        <p class="hero-subtitle">
                            "Drag teams to reorder within each group. Select playoff winners from the dropdowns."
                        </p>
                    </section>

                    <div class="group-grid">
                        <For
                            each=move || letters.clone()
                            key=|letter| letter.clone()
                            children=move |letter| view! { <GroupCard letter=letter /> }
                        />
                    </div>
                </div>

                <SaveBar />
            </div>

            <PlayoffMenu />
        </div>
    }
}
