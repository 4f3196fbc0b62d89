use serde::{Deserialize, Serialize};

use crate::section::SectionId;
use crate::theme::Theme;

/// Snapshot of everything a renderer needs to draw the dynamic parts of the
/// page.
///
/// Produced by the controller after every event; renderers compare
/// snapshots to decide what to repaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Nothing should be drawn until the controller has mounted.
    pub mounted: bool,
    pub role_index: usize,
    pub role: String,
    pub active_section: SectionId,
    pub scroll_top_visible: bool,
    pub theme: Theme,
}

impl ViewState {
    /// Whether a nav entry for `section` should be highlighted.
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let state = ViewState {
            mounted: true,
            role_index: 2,
            role: "Open Source Enthusiast".into(),
            active_section: SectionId::Projects,
            scroll_top_visible: true,
            theme: Theme::Dark,
        };
        let value = serde_json::to_value(&state).unwrap_or_default();
        assert_eq!(value["active_section"], "projects");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["role_index"], 2);
        assert!(state.is_active(SectionId::Projects));
        assert!(!state.is_active(SectionId::Hero));
    }
}
