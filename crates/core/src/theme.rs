use folio_protocol::Theme;
use tracing::{debug, warn};

use crate::platform::ThemeStore;

/// Flip semantics over a [`ThemeStore`].
///
/// Keeps the theme in effect for this session next to the store. When the
/// store cannot be read the page falls back to [`Theme::Light`]; when it
/// cannot be written the flip still applies for the session.
#[derive(Debug)]
pub struct ThemeToggle<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeToggle<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Theme::default(),
        }
    }

    /// Refresh the current theme from the store.
    pub fn load(&mut self) -> Theme {
        self.current = match self.store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => {
                debug!("no stored theme, using {}", Theme::default());
                Theme::default()
            }
            Err(e) => {
                warn!("failed to read theme preference: {e}");
                Theme::default()
            }
        };
        self.current
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        let theme = self.current.toggled();
        if let Err(e) = self.store.save(theme) {
            warn!("failed to persist theme preference: {e}");
        }
        self.current = theme;
        theme
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryThemeStore, ThemeStoreError};

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
            Err(ThemeStoreError::Unavailable("storage disabled".into()))
        }

        fn save(&mut self, _theme: Theme) -> Result<(), ThemeStoreError> {
            Err(ThemeStoreError::Unavailable("storage disabled".into()))
        }
    }

    #[test]
    fn loads_stored_theme() {
        let mut toggle = ThemeToggle::new(MemoryThemeStore::with_theme(Theme::Dark));
        assert_eq!(toggle.load(), Theme::Dark);
    }

    #[test]
    fn empty_store_defaults_to_light() {
        let mut toggle = ThemeToggle::new(MemoryThemeStore::new());
        assert_eq!(toggle.load(), Theme::Light);
    }

    #[test]
    fn toggle_persists_and_round_trips() {
        let mut toggle = ThemeToggle::new(MemoryThemeStore::new());
        toggle.load();
        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.store().stored(), Some(Theme::Dark));
        assert_eq!(toggle.toggle(), Theme::Light);
        assert_eq!(toggle.store().stored(), Some(Theme::Light));
    }

    #[test]
    fn broken_store_still_toggles() {
        let mut toggle = ThemeToggle::new(BrokenStore);
        assert_eq!(toggle.load(), Theme::Light);
        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.current(), Theme::Dark);
        assert_eq!(toggle.toggle(), Theme::Light);
    }
}
