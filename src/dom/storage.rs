//! `window.localStorage` as a [`KeyValueStore`].

use web_sys::Storage;

use crate::error::{PageError, js_message};
use crate::store::KeyValueStore;

/// The page's `localStorage`, looked up on every call so a store that becomes
/// unavailable mid-session is reported rather than cached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

fn local_storage() -> Result<Storage, PageError> {
    let window = web_sys::window().ok_or(PageError::StorageUnavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(PageError::StorageUnavailable),
        Err(err) => Err(PageError::Storage(js_message(&err))),
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| PageError::Storage(js_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| PageError::Storage(js_message(&err)))
    }
}
