use std::path::PathBuf;

use folio_core::{ThemeStore, ThemeStoreError};
use folio_protocol::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Stored {
    theme: Theme,
}

/// Theme preference kept in a small JSON file: `{"theme": "dark"}`.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: Stored = serde_json::from_str(&text)?;
        Ok(Some(stored.theme))
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }
        let text = serde_json::to_string(&Stored { theme })?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
