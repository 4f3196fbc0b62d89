use folio_core::{ThemeStore, ThemeStoreError};
use folio_protocol::Theme;
use wasm_bindgen::JsValue;

/// `localStorage` key, shared with the inline script in `index.html` that
/// applies the theme before first paint.
pub const THEME_KEY: &str = "theme";

/// Theme preference kept in the browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageThemeStore {
    key: String,
}

impl LocalStorageThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, ThemeStoreError> {
        let window =
            web_sys::window().ok_or_else(|| ThemeStoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| ThemeStoreError::Unavailable(js_error(&e)))?
            .ok_or_else(|| ThemeStoreError::Unavailable("localStorage is disabled".into()))
    }
}

impl Default for LocalStorageThemeStore {
    fn default() -> Self {
        Self::new(THEME_KEY)
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let stored = Self::storage()?
            .get_item(&self.key)
            .map_err(|e| ThemeStoreError::Access(js_error(&e)))?;
        match stored {
            Some(value) => Ok(Some(value.parse()?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        Self::storage()?
            .set_item(&self.key, theme.as_str())
            .map_err(|e| ThemeStoreError::Access(js_error(&e)))
    }
}

pub(crate) fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
