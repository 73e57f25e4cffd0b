//! Detached dropdown menu: open/closed state, screen placement relative to
//! an anchor, and the dismissal rules. Rendering is left to the UI layer.

use crate::config::MENU_GAP_PX;

/// The placeholder slot a menu belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuOwner {
    pub group: String,
    pub index: usize,
}

impl MenuOwner {
    pub fn new(group: &str, index: usize) -> Self {
        Self {
            group: group.to_string(),
            index,
        }
    }

    /// DOM id of the rendered menu, used for outside-click hit testing.
    pub fn element_id(&self) -> String {
        format!("wc-menu-{}-{}", self.group, self.index)
    }

    /// DOM id of the element the menu hangs below.
    pub fn anchor_element_id(&self) -> String {
        format!("wc-anchor-{}-{}", self.group, self.index)
    }
}

/// Viewport-relative bounding box of an anchor element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

/// Where the menu should be drawn, in fixed (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl MenuPosition {
    pub fn below(anchor: &AnchorRect, gap: f64) -> Self {
        Self {
            top: anchor.bottom + gap,
            left: anchor.left,
            width: anchor.width,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: fixed; top: {}px; left: {}px; width: {}px; z-index: 9999;",
            self.top, self.left, self.width
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    Switched { from: MenuOwner },
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent<'a> {
    /// `KeyboardEvent.key` of a document keydown.
    Key(&'a str),
    /// Document pointerdown, with hit tests against the anchor and the menu.
    PointerDown { in_anchor: bool, in_menu: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    Escape,
    OutsidePointer,
}

/// Page-wide menu state; at most one menu is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayMenu {
    open: Option<MenuOwner>,
    position: Option<MenuPosition>,
}

impl OverlayMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<&MenuOwner> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn is_open_for(&self, owner: &MenuOwner) -> bool {
        self.open.as_ref() == Some(owner)
    }

    /// Placement of the open menu. `None` until an anchor rect is known.
    pub fn position(&self) -> Option<MenuPosition> {
        self.position
    }

    /// Close if `owner` is already open, otherwise open it (closing any
    /// other menu).
    pub fn toggle(&mut self, owner: MenuOwner, anchor: Option<AnchorRect>) -> MenuTransition {
        match self.open.take() {
            Some(current) if current == owner => {
                self.position = None;
                MenuTransition::Closed
            }
            previous => {
                self.position = anchor.map(|rect| MenuPosition::below(&rect, MENU_GAP_PX));
                self.open = Some(owner);
                match previous {
                    Some(from) => MenuTransition::Switched { from },
                    None => MenuTransition::Opened,
                }
            }
        }
    }

    /// Recompute placement after a scroll or resize. A vanished anchor
    /// keeps the last known position.
    pub fn reposition(&mut self, anchor: Option<AnchorRect>) -> Option<MenuPosition> {
        if self.open.is_none() {
            return None;
        }
        if let Some(rect) = anchor {
            self.position = Some(MenuPosition::below(&rect, MENU_GAP_PX));
        }
        self.position
    }

    pub fn close(&mut self) -> Option<MenuOwner> {
        self.position = None;
        self.open.take()
    }

    /// Apply a document-level event. Returns the trigger if it dismissed
    /// the menu.
    pub fn handle(&mut self, event: OverlayEvent<'_>) -> Option<DismissTrigger> {
        if self.open.is_none() {
            return None;
        }
        let trigger = match event {
            OverlayEvent::Key("Escape") => DismissTrigger::Escape,
            OverlayEvent::Key(_) => return None,
            OverlayEvent::PointerDown { in_anchor, in_menu } => {
                if in_anchor || in_menu {
                    return None;
                }
                DismissTrigger::OutsidePointer
            }
        };
        self.close();
        Some(trigger)
    }

    /// An option was picked in `owner`'s menu. Closes the menu and hands the
    /// owner back so the caller can fill the slot; `None` if that menu was
    /// not the open one.
    pub fn select(&mut self, owner: &MenuOwner) -> Option<MenuOwner> {
        if !self.is_open_for(owner) {
            return None;
        }
        self.close()
    }
}

/// Holds the listener registration of the open menu. Dropping a binding
/// must unregister its listeners.
#[derive(Debug)]
pub struct ListenerSlot<B> {
    binding: Option<B>,
}

impl<B> Default for ListenerSlot<B> {
    fn default() -> Self {
        Self { binding: None }
    }
}

impl<B> ListenerSlot<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind when `open` and nothing is bound yet; drop the binding when
    /// closed. `bind` may fail (e.g. no window), leaving the slot empty.
    pub fn sync(&mut self, open: bool, bind: impl FnOnce() -> Option<B>) {
        if !open {
            self.binding = None;
        } else if self.binding.is_none() {
            self.binding = bind();
        }
    }

    pub fn clear(&mut self) {
        self.binding = None;
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}
