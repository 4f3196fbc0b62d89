//! Browser frontend: binds the view-state controller to the live DOM.
//!
//! The page skeleton (`web/index.html`) provides the section anchors and the
//! containers; this crate fills them, keeps the dynamic parts in sync, and
//! owns the interval and listeners that feed the controller.

mod dom;
mod logging;
mod portfolio;
mod render;
mod storage;

pub use dom::WebDocument;
pub use logging::ConsoleMakeWriter;
pub use portfolio::{ClickAction, Portfolio, section_ids};
pub use storage::{LocalStorageThemeStore, THEME_KEY};

use wasm_bindgen::prelude::*;

/// `localStorage` key holding an optional log filter, e.g.
/// `folio_core=debug`.
const LOG_FILTER_KEY: &str = "folio_log";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let filter = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LOG_FILTER_KEY).ok().flatten())
        .unwrap_or_else(|| "info".to_owned());
    logging::init(&filter);
}
