pub mod colors;
pub mod config;
pub mod draft;
pub mod drag;
pub mod intro;
pub mod morph;
pub mod overlay;
pub mod reference;
pub mod stagger;
pub mod store;

pub use colors::flag_gradient;
pub use draft::{Draft, DraftError, Slot, TeamEntry, TeamOption};
pub use drag::{DragGesture, RowMove};
pub use overlay::{MenuOwner, OverlayMenu};
pub use reference::ReferenceDataset;
pub use stagger::hash01;
pub use store::{DraftStore, KeyValueStore, MemoryStore};

#[cfg(test)]
mod tests {
    use crate::draft::{Draft, TeamOption};
    use crate::drag::DragGesture;
    use crate::overlay::{MenuOwner, OverlayEvent, OverlayMenu};
    use crate::reference::ReferenceDataset;
    use crate::store::{DraftStore, MemoryStore};
    use serde_json::json;

    fn reference() -> ReferenceDataset {
        let json = json!({
            "groups": {
                "A": [
                    { "id": "mex", "name": "Mexico", "colors": ["#006847", "#FFFFFF", "#CE1126"] },
                    { "id": "rsa", "name": "South Africa" },
                    { "id": "kor", "name": "Korea Republic" },
                    { "id": "uefa-d", "is_placeholder": true, "placeholder_options": [
                        { "id": "den", "name": "Denmark", "colors": ["#C8102E", "#FFFFFF"] },
                        { "id": "cze", "name": "Czechia", "colors": ["#FFFFFF", "#D7141A", "#11457E"] }
                    ] }
                ],
                "B": [
                    { "id": "can", "name": "Canada" },
                    { "id": "uefa-a", "is_placeholder": true, "placeholder_options": [
                        { "id": "ita", "name": "Italy" }
                    ] }
                ]
            }
        });
        ReferenceDataset::from_json(&json.to_string()).expect("reference parses")
    }

    fn option_at(draft: &Draft, letter: &str, index: usize, option: usize) -> TeamOption {
        let slot = &draft.group(letter).expect("group exists")[index];
        slot.options()[option].clone()
    }

    #[test]
    fn pick_playoff_winner_completes_group_and_persists() {
        let reference = reference();
        let backing = MemoryStore::new();
        let store = DraftStore::new(&backing);
        let mut draft = store.load(&reference).unwrap_or_else(|| reference.draft());

        assert!(!draft.is_complete("A"));
        assert_eq!(draft.completion_count(), 0);

        let mut menu = OverlayMenu::new();
        let owner = MenuOwner::new("A", 3);
        menu.toggle(owner.clone(), None);
        assert_eq!(
            menu.handle(OverlayEvent::PointerDown {
                in_anchor: false,
                in_menu: true
            }),
            None
        );

        let picked = option_at(&draft, "A", 3, 1);
        let slot = menu.select(&owner).expect("menu was open");
        draft
            .replace_placeholder(&slot.group, slot.index, picked)
            .expect("slot is a placeholder");
        store.save(&draft).expect("serializes");

        assert!(draft.is_complete("A"));
        assert_eq!(draft.completion_count(), 1);
        assert!(!menu.is_open());

        let reloaded = DraftStore::new(&backing)
            .load(&reference)
            .expect("saved draft reloads");
        assert_eq!(reloaded.group("A").expect("group A")[3].id, "cze");
        assert_eq!(reloaded.completion_count(), 1);
    }

    #[test]
    fn drag_drop_reorders_and_persists() {
        let reference = reference();
        let backing = MemoryStore::new();
        let store = DraftStore::new(&backing);
        let mut draft = reference.draft();

        let mut drag = DragGesture::default();
        drag.start("A", 0);
        let row_move = drag.drop_on("A", 2).expect("same group, different row");
        assert!(draft.reorder(&row_move.group, row_move.from, row_move.to));
        store.save(&draft).expect("serializes");

        let ids: Vec<String> = store
            .load(&reference)
            .expect("reloads")
            .group("A")
            .expect("group A")
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["rsa", "kor", "mex", "uefa-d"]);
    }
}
