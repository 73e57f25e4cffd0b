use std::collections::HashMap;
use wasm_bindgen::JsCast;

use wc_bracket_shared::morph::{FlipTransform, Rect};

use crate::dom;

const FLAG_KEY_ATTR: &str = "data-flag-key";
const INTRO_FLAGS: &str = ".intro-overlay [data-flag-key]";
const CARD_FLAGS: &str = ".page-content [data-flag-key]";
const FLIP_TRANSITION: &str = "transform 520ms cubic-bezier(0.22, 1, 0.36, 1)";

fn flag_elements(document: &web_sys::Document, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Animate each group-card flag from where its intro tile currently sits.
/// Tiles and card flags are matched by their `data-flag-key`.
pub(crate) fn play_flag_handoff() {
    let Some(document) = dom::document() else {
        return;
    };

    let first: HashMap<String, Rect> = flag_elements(&document, INTRO_FLAGS)
        .iter()
        .filter_map(|el| Some((el.get_attribute(FLAG_KEY_ATTR)?, dom::element_rect(el))))
        .collect();
    if first.is_empty() {
        return;
    }

    let mut moved = 0usize;
    for el in flag_elements(&document, CARD_FLAGS) {
        let Some(from) = el
            .get_attribute(FLAG_KEY_ATTR)
            .and_then(|key| first.get(&key).copied())
        else {
            continue;
        };
        let Some(flip) = FlipTransform::between(from, dom::element_rect(&el)) else {
            continue;
        };
        let style = el.style();
        style.set_property("transition", "none").ok();
        style.set_property("transform-origin", "top left").ok();
        style.set_property("transform", &flip.css()).ok();
        // Reading layout commits the inverted start state before playing.
        let _ = el.offset_width();
        style.set_property("transition", FLIP_TRANSITION).ok();
        style.set_property("transform", "none").ok();
        moved += 1;
    }
    web_sys::console::info_1(&format!("flag_handoff_count={moved}").into());
}
