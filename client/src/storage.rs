use gloo_storage::{LocalStorage, Storage};
use wc_bracket_shared::KeyValueStore;

/// `window.localStorage`, raw strings in and out.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            web_sys::console::warn_1(&format!("Failed to persist {key}: {e:?}").into());
        }
    }
}
