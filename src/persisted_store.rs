use folio_core::{PreferenceStorage, PreferenceStore, StorageError};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`, read and written as raw strings. Outside the
/// browser every read misses and every write fails.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStorage;

impl PreferenceStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(storage) =
                web_sys::window().and_then(|window| window.local_storage().ok().flatten())
            else {
                return Err(StorageError::Unavailable);
            };
            storage.set_item(key, value).map_err(|err| {
                gloo::console::debug!("localStorage.setItem threw:", err);
                StorageError::Rejected
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

pub(crate) fn theme_store() -> PreferenceStore<LocalStorage> {
    PreferenceStore::new(LocalStorage)
}

pub(crate) fn prefers_dark_scheme() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(Some(query)) = window.match_media(DARK_SCHEME_QUERY) else {
        return false;
    };
    query.matches()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use folio_core::theme::THEME_STORAGE_KEY;
    use folio_core::ThemePreference;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn theme_round_trips_through_local_storage() {
        let store = theme_store();
        assert_eq!(store.save(ThemePreference::Dark), Ok(()));
        assert_eq!(
            LocalStorage.get_item(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
        assert_eq!(store.load(false), ThemePreference::Dark);
        assert_eq!(store.save(ThemePreference::Light), Ok(()));
        assert_eq!(store.load(true), ThemePreference::Light);
    }
}
