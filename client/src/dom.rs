use wc_bracket_shared::morph::Rect;
use wc_bracket_shared::overlay::{AnchorRect, MenuOwner};

pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub(crate) fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Current bounding box of the owner's dropdown anchor, if it is mounted.
pub(crate) fn anchor_rect(owner: &MenuOwner) -> Option<AnchorRect> {
    let anchor = document()?.get_element_by_id(&owner.anchor_element_id())?;
    let r = anchor.get_bounding_client_rect();
    Some(AnchorRect {
        top: r.top(),
        left: r.left(),
        bottom: r.bottom(),
        width: r.width(),
    })
}

/// Whether `target` sits inside the element with id `id`.
pub(crate) fn element_contains(id: &str, target: Option<&web_sys::Node>) -> bool {
    let Some(target) = target else {
        return false;
    };
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .is_some_and(|el| el.contains(Some(target)))
}
