use folio_protocol::theme::ParseThemeError;
use folio_protocol::{Bounds, SectionId, Theme};
use thiserror::Error;

/// The page the controller observes and scrolls.
///
/// Implemented over the DOM in the browser and over a simulated layout in
/// the terminal frontend. Geometry reads are synchronous and infallible;
/// a section that is not mounted simply has no bounds.
pub trait Document {
    /// Bounding box of a section relative to the viewport top, or `None`
    /// when its anchor element is not in the document.
    fn section_bounds(&self, id: SectionId) -> Option<Bounds>;

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Request a smooth scroll back to offset 0.
    fn scroll_to_top(&mut self);

    /// Request a smooth scroll that brings the section into view.
    /// Returns `false` when the section's element does not exist.
    fn scroll_into_view(&mut self, id: SectionId) -> bool;
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("theme storage unavailable: {0}")]
    Unavailable(String),
    #[error("theme storage access failed: {0}")]
    Access(String),
    #[error("theme storage I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored theme is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ParseThemeError),
}

/// Persistence for the theme preference.
pub trait ThemeStore {
    /// The stored preference, or `None` when nothing was stored yet.
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// Process-local store. Loses the preference on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }

    pub fn stored(&self) -> Option<Theme> {
        self.theme
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Ok(self.theme)
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        self.theme = Some(theme);
        Ok(())
    }
}

impl<T: ThemeStore + ?Sized> ThemeStore for Box<T> {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        (**self).load()
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        (**self).save(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryThemeStore::new();
        assert!(matches!(store.load(), Ok(None)));
    }

    #[test]
    fn memory_store_keeps_last_save() {
        let mut store = MemoryThemeStore::with_theme(Theme::Light);
        store.save(Theme::Dark).expect("memory save");
        assert!(matches!(store.load(), Ok(Some(Theme::Dark))));
        assert_eq!(store.stored(), Some(Theme::Dark));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn ThemeStore> = Box::new(MemoryThemeStore::new());
        store.save(Theme::Dark).expect("memory save");
        assert!(matches!(store.load(), Ok(Some(Theme::Dark))));
    }
}
