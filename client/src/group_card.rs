use leptos::prelude::*;

use wc_bracket_shared::morph::flag_key;
use wc_bracket_shared::{DragGesture, MenuOwner, TeamEntry, flag_gradient};

use crate::app::{DraftState, DragState, MenuState};
use crate::dom;

const GRIP_SVG: &str = r#"<svg class="drag-icon" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="9" cy="12" r="1"/><circle cx="9" cy="5" r="1"/><circle cx="9" cy="19" r="1"/><circle cx="15" cy="12" r="1"/><circle cx="15" cy="5" r="1"/><circle cx="15" cy="19" r="1"/></svg>"#;
const CHEVRON_SVG: &str = r#"<svg class="chev" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"/></svg>"#;

/// One group's predicted standing, reorderable by drag and drop.
#[component]
pub fn GroupCard(letter: String) -> impl IntoView {
    let DraftState(draft) = expect_context();
    let DragState(drag) = expect_context();

    let tab = letter.clone();
    let label = format!("Group {letter}");
    let drag_letter = letter.clone();
    let rows_letter = letter.clone();

    let rows = move || {
        draft.with(|d| {
            d.group(&rows_letter)
                .map(|teams| teams.iter().cloned().enumerate().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div
            class="group-card"
            class:is-dragging=move || drag.with(|g| g.is_dragging_group(&drag_letter))
        >
            <div class="group-tab">{tab}</div>
            <div class="group-card__inner">
                <div class="group-label">{label}</div>
                <For
                    each=rows
                    key=|row| (row.0, row.1.id.clone())
                    children=move |(index, team)| {
                        view! { <TeamRow letter=letter.clone() index=index team=team /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn TeamRow(letter: String, index: usize, team: TeamEntry) -> impl IntoView {
    let DraftState(draft) = expect_context();
    let DragState(drag) = expect_context();
    let MenuState(menu) = expect_context();

    let position_label = format!("{letter}{}", index + 1);
    let flag_style = format!("background-image: {};", flag_gradient(&team.colors));
    let morph_key = flag_key(&team.id);
    let drag_payload = team.id.clone();

    let start_letter = letter.clone();
    let on_drag_start = move |ev: web_sys::DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            // Firefox will not start a drag without payload.
            transfer.set_data("text/plain", &drag_payload).ok();
        }
        drag.update(|g| g.start(&start_letter, index));
    };

    let on_drag_over = move |ev: web_sys::DragEvent| {
        if !drag.with_untracked(DragGesture::accepts_over) {
            return;
        }
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
    };

    let drop_letter = letter.clone();
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(row_move) = drag
            .try_update(|g| g.drop_on(&drop_letter, index))
            .flatten()
        else {
            return;
        };
        menu.update(|m| {
            m.close();
        });
        draft.update(|d| {
            d.reorder(&row_move.group, row_move.from, row_move.to);
        });
    };

    let on_drag_end = move |_: web_sys::DragEvent| drag.update(DragGesture::end);

    let row_letter = letter.clone();
    let is_dragged = move || drag.with(|g| g.is_dragging_row(&row_letter, index));

    let body = if team.is_placeholder() {
        let owner = MenuOwner::new(&letter, index);
        let anchor_id = owner.anchor_element_id();

        let toggle_owner = owner.clone();
        let on_toggle = move |_: web_sys::MouseEvent| {
            let anchor = dom::anchor_rect(&toggle_owner);
            menu.update(|m| {
                m.toggle(toggle_owner.clone(), anchor);
            });
        };

        let open_owner = owner.clone();
        let expanded = move || menu.with(|m| m.is_open_for(&open_owner)).to_string();

        // The menu must not outlive the row it hangs from.
        on_cleanup(move || {
            menu.try_update(|m| {
                if m.is_open_for(&owner) {
                    m.close();
                }
            });
        });

        view! {
            <div class="dropdown-anchor" id=anchor_id>
                <button type="button" class="select-btn" on:click=on_toggle aria-expanded=expanded>
                    <div class="select-wrap">
                        <div class="select-meta">
                            <div class="select-value select-value--placeholder">"Pick playoff winner"</div>
                        </div>
                        <span inner_html=CHEVRON_SVG />
                    </div>
                </button>
            </div>
        }
        .into_any()
    } else {
        view! { <span class="team-name">{team.name.clone()}</span> }.into_any()
    };

    view! {
        <div
            class="team-row"
            class:dragging=is_dragged
            draggable="true"
            on:dragstart=on_drag_start
            on:dragover=on_drag_over
            on:drop=on_drop
            on:dragend=on_drag_end
        >
            <div class="drag-handle" aria-hidden="true" inner_html=GRIP_SVG />
            <div class="pos-pill">{position_label}</div>
            <div class="flag flag--morph" data-flag-key=morph_key style=flag_style />
            {body}
        </div>
    }
}
