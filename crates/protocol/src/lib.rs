pub mod section;
pub mod state;
pub mod theme;
pub mod types;

pub use section::{ParseSectionError, SectionId};
pub use state::ViewState;
pub use theme::{ParseThemeError, Theme, ThemeToken};
pub use types::Bounds;
