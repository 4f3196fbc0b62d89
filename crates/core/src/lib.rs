//! View-state controller for the folio portfolio page.
//!
//! The controller turns two event sources, a repeating timer and the
//! viewport scroll stream, into a [`ViewState`] snapshot. Everything that
//! touches a real page goes through the [`Document`] and [`ThemeStore`]
//! traits so the derivations stay testable without a browser.

pub mod config;
pub mod content;
pub mod controller;
pub mod navigator;
pub mod platform;
pub mod rotator;
pub mod scroll;
pub mod theme;

pub use config::{Config, ConfigError};
pub use controller::ViewController;
pub use platform::{Document, MemoryThemeStore, ThemeStore, ThemeStoreError};
pub use rotator::RoleRotator;
pub use scroll::{GeometrySnapshot, ScrollObserver, resolve_active_section, scroll_top_visible};
pub use theme::ThemeToggle;

pub use folio_protocol::{Bounds, SectionId, Theme, ViewState};
