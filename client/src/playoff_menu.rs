use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use wc_bracket_shared::overlay::{ListenerSlot, MenuPosition, OverlayEvent};
use wc_bracket_shared::{OverlayMenu, flag_gradient};

use crate::app::{DraftState, MenuState};
use crate::dom;

const UNPLACED_STYLE: &str = "position: fixed; visibility: hidden;";

/// Window/document listeners registered while a menu is open. Dropping the
/// binding unregisters all of them.
struct MenuListenerBinding {
    window: web_sys::Window,
    document: web_sys::Document,
    on_reposition: Closure<dyn Fn()>,
    on_keydown: Closure<dyn Fn(web_sys::KeyboardEvent)>,
    on_pointerdown: Closure<dyn Fn(web_sys::PointerEvent)>,
}

impl MenuListenerBinding {
    fn bind(menu: RwSignal<OverlayMenu>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let on_reposition = Closure::<dyn Fn()>::new(move || {
            let Some(owner) = menu.with_untracked(|m| m.owner().cloned()) else {
                return;
            };
            let anchor = dom::anchor_rect(&owner);
            menu.try_update(|m| {
                m.reposition(anchor);
            });
        });

        let on_keydown =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                let key = e.key();
                menu.try_update(|m| m.handle(OverlayEvent::Key(&key)));
            });

        let on_pointerdown =
            Closure::<dyn Fn(web_sys::PointerEvent)>::new(move |e: web_sys::PointerEvent| {
                let Some(owner) = menu.with_untracked(|m| m.owner().cloned()) else {
                    return;
                };
                let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                let event = OverlayEvent::PointerDown {
                    in_anchor: dom::element_contains(&owner.anchor_element_id(), target.as_ref()),
                    in_menu: dom::element_contains(&owner.element_id(), target.as_ref()),
                };
                menu.try_update(|m| m.handle(event));
            });

        // Built before registering so a failed registration drops (and so
        // unregisters) whatever was already added.
        let binding = Self {
            window,
            document,
            on_reposition,
            on_keydown,
            on_pointerdown,
        };
        for (target, event, callback, capture) in binding.listeners() {
            target
                .add_event_listener_with_callback_and_bool(event, callback, capture)
                .ok()?;
        }
        Some(binding)
    }

    /// Target, event, callback and capture flag of every registration.
    /// Scroll is captured so nested scroll containers move the menu too.
    fn listeners(&self) -> [(&web_sys::EventTarget, &'static str, &js_sys::Function, bool); 4] {
        let window: &web_sys::EventTarget = self.window.as_ref();
        let document: &web_sys::EventTarget = self.document.as_ref();
        let reposition: &js_sys::Function = self.on_reposition.as_ref().unchecked_ref();
        let keydown: &js_sys::Function = self.on_keydown.as_ref().unchecked_ref();
        let pointerdown: &js_sys::Function = self.on_pointerdown.as_ref().unchecked_ref();
        [
            (window, "scroll", reposition, true),
            (window, "resize", reposition, false),
            (document, "keydown", keydown, false),
            (document, "pointerdown", pointerdown, false),
        ]
    }
}

impl Drop for MenuListenerBinding {
    fn drop(&mut self) {
        for (target, event, callback, capture) in self.listeners() {
            let _ = target.remove_event_listener_with_callback_and_bool(event, callback, capture);
        }
    }
}

thread_local! {
    static MENU_LISTENERS: RefCell<ListenerSlot<MenuListenerBinding>> =
        RefCell::new(ListenerSlot::new());
}

pub(crate) fn sync_listeners(menu: RwSignal<OverlayMenu>, open: bool) {
    MENU_LISTENERS.with(|slot| {
        slot.borrow_mut()
            .sync(open, || MenuListenerBinding::bind(menu));
    });
}

pub(crate) fn release_listeners() {
    MENU_LISTENERS.with(|slot| slot.borrow_mut().clear());
}

fn menu_style(position: Option<MenuPosition>) -> String {
    position.map_or_else(|| UNPLACED_STYLE.to_string(), |p| p.css())
}

/// The single page-wide dropdown, drawn at the page root with fixed
/// positioning so group cards never clip it.
#[component]
pub fn PlayoffMenu() -> impl IntoView {
    let MenuState(menu) = expect_context();
    let DraftState(draft) = expect_context();

    // Rebuilt only when a different slot opens; scroll and resize just
    // restyle it.
    let open_owner = Memo::new(move |_| menu.with(|m| m.owner().cloned()));
    let style = move || menu_style(menu.with(OverlayMenu::position));

    move || {
        open_owner.get().map(|owner| {
            let options = draft.with_untracked(|d| {
                d.group(&owner.group)
                    .and_then(|teams| teams.get(owner.index))
                    .map(|slot| slot.options().to_vec())
                    .unwrap_or_default()
            });

            let items = options
                .into_iter()
                .map(|option| {
                    let owner = owner.clone();
                    let gradient = flag_gradient(&option.colors);
                    let name = option.name.clone();
                    let on_pick = move |_: web_sys::MouseEvent| {
                        let Some(slot) = menu.try_update(|m| m.select(&owner)).flatten() else {
                            return;
                        };
                        let picked = option.clone();
                        draft.update(|d| {
                            if let Err(e) = d.replace_placeholder(&slot.group, slot.index, picked) {
                                web_sys::console::warn_1(
                                    &format!("Playoff pick rejected: {e}").into(),
                                );
                            }
                        });
                    };
                    view! {
                        <div class="menu-item" role="option" on:click=on_pick>
                            <div class="menu-flag" style=format!("background-image: {gradient};") />
                            <span class="menu-name">{name}</span>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div id=owner.element_id() class="menu" role="listbox" style=style>
                    {items}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{UNPLACED_STYLE, menu_style};
    use wc_bracket_shared::overlay::MenuPosition;

    #[test]
    fn unmeasured_menu_stays_hidden() {
        assert_eq!(menu_style(None), UNPLACED_STYLE);
    }

    #[test]
    fn measured_menu_uses_fixed_placement() {
        let position = MenuPosition {
            top: 120.0,
            left: 16.0,
            width: 240.0,
        };
        assert_eq!(
            menu_style(Some(position)),
            "position: fixed; top: 120px; left: 16px; width: 240px; z-index: 9999;"
        );
    }
}
