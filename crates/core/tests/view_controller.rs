//! Integration test: drive the controller through a simulated page with a
//! scripted scroll position, a failing theme store, and a teardown.

use std::collections::HashMap;

use folio_core::{
    Bounds, Config, Document, MemoryThemeStore, SectionId, Theme, ThemeStore, ThemeStoreError,
    ViewController,
};

/// A page where each mounted section has a fixed document-space extent and
/// the viewport top sits at `offset`.
#[derive(Default)]
struct FakePage {
    sections: HashMap<SectionId, (f64, f64)>,
    offset: f64,
    scroll_requests: Vec<SectionId>,
}

impl FakePage {
    fn stacked(heights: &[(SectionId, f64)]) -> Self {
        let mut page = FakePage::default();
        let mut top = 0.0;
        for &(id, height) in heights {
            page.sections.insert(id, (top, top + height));
            top += height;
        }
        page
    }
}

impl Document for FakePage {
    fn section_bounds(&self, id: SectionId) -> Option<Bounds> {
        self.sections
            .get(&id)
            .map(|&(top, bottom)| Bounds::new(top - self.offset, bottom - self.offset))
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to_top(&mut self) {
        self.offset = 0.0;
    }

    fn scroll_into_view(&mut self, id: SectionId) -> bool {
        let Some(&(top, _)) = self.sections.get(&id) else {
            return false;
        };
        self.scroll_requests.push(id);
        self.offset = top;
        true
    }
}

struct DisabledStorage;

impl ThemeStore for DisabledStorage {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Err(ThemeStoreError::Unavailable("localStorage is disabled".into()))
    }

    fn save(&mut self, _theme: Theme) -> Result<(), ThemeStoreError> {
        Err(ThemeStoreError::Unavailable("localStorage is disabled".into()))
    }
}

fn full_page() -> FakePage {
    FakePage::stacked(&[
        (SectionId::Hero, 800.0),
        (SectionId::About, 600.0),
        (SectionId::Skills, 700.0),
        (SectionId::Projects, 900.0),
        (SectionId::Education, 400.0),
        (SectionId::Certifications, 500.0),
        (SectionId::Contact, 600.0),
    ])
}

fn mounted() -> ViewController<MemoryThemeStore> {
    let mut view =
        ViewController::new(Config::default(), MemoryThemeStore::new()).expect("valid config");
    view.mount();
    view
}

#[test]
fn scrolling_through_the_page_highlights_each_section() {
    let mut view = mounted();
    let mut page = full_page();

    let mut seen = Vec::new();
    for offset in (0..4_000).step_by(50) {
        page.offset = f64::from(offset);
        view.on_scroll(&page);
        if seen.last() != Some(&view.active_section()) {
            seen.push(view.active_section());
        }
        assert_eq!(view.scroll_top_visible(), page.offset > 400.0);
    }
    assert_eq!(seen, SectionId::ORDER);
}

#[test]
fn scroll_top_boundary() {
    let mut view = mounted();
    let mut page = full_page();

    page.offset = 399.0;
    view.on_scroll(&page);
    assert!(!view.scroll_top_visible());

    page.offset = 400.0;
    view.on_scroll(&page);
    assert!(!view.scroll_top_visible());

    page.offset = 401.0;
    view.on_scroll(&page);
    assert!(view.scroll_top_visible());

    view.scroll_to_top(&mut page);
    view.on_scroll(&page);
    assert!(!view.scroll_top_visible());
    assert_eq!(view.active_section(), SectionId::Hero);
}

#[test]
fn late_mounted_sections_are_skipped_and_previous_kept() {
    let mut view = mounted();

    let mut page = FakePage::stacked(&[(SectionId::Hero, 800.0), (SectionId::About, 600.0)]);
    page.offset = 750.0;
    view.on_scroll(&page);
    assert_eq!(view.active_section(), SectionId::About);

    // Past the end of everything that is mounted: nothing covers the probe.
    page.offset = 5_000.0;
    view.on_scroll(&page);
    assert_eq!(view.active_section(), SectionId::About);
}

#[test]
fn navigating_to_missing_section_changes_nothing() {
    let view = mounted();
    let mut page = FakePage::stacked(&[(SectionId::Hero, 800.0)]);
    let before = view.state();

    assert!(!view.scroll_to_section(&mut page, "contact"));
    assert!(!view.scroll_to_section(&mut page, "not-a-section"));
    assert!(page.scroll_requests.is_empty());
    assert_eq!(view.state(), before);
}

#[test]
fn navigation_then_scroll_event_moves_highlight() {
    let mut view = mounted();
    let mut page = full_page();

    assert!(view.scroll_to_section(&mut page, "projects"));
    assert_eq!(view.active_section(), SectionId::Hero);
    view.on_scroll(&page);
    assert_eq!(view.active_section(), SectionId::Projects);
}

#[test]
fn nothing_changes_after_teardown() {
    let mut view = mounted();
    let mut page = full_page();
    view.on_tick();
    let before = view.state();

    view.unmount();
    page.offset = 2_000.0;
    assert!(!view.on_tick());
    assert!(!view.on_scroll(&page));

    let after = view.state();
    assert!(!after.mounted);
    assert_eq!(after.role_index, before.role_index);
    assert_eq!(after.active_section, before.active_section);
    assert_eq!(after.scroll_top_visible, before.scroll_top_visible);
}

#[test]
fn disabled_theme_storage_defaults_light_and_still_toggles() {
    let mut view = ViewController::new(Config::default(), DisabledStorage).expect("valid config");
    view.mount();
    assert_eq!(view.theme(), Theme::Light);
    assert_eq!(view.toggle_theme(), Theme::Dark);
    assert_eq!(view.toggle_theme(), Theme::Light);
}

#[test]
fn role_index_tracks_firings() {
    let config = Config::from_json(r#"{"roles": ["A", "B", "C"]}"#).expect("valid config");
    let mut view = ViewController::new(config, MemoryThemeStore::new()).expect("valid config");
    view.mount();
    for n in 1..=20 {
        view.on_tick();
        assert_eq!(view.role_index(), n % 3);
        assert_eq!(view.state().role, ["A", "B", "C"][n % 3]);
    }
}

#[test]
fn remount_restarts_rotation_and_scroll_state() {
    let config = Config::from_json(r#"{"roles": ["A", "B", "C"]}"#).expect("valid config");
    let mut view = ViewController::new(config, MemoryThemeStore::new()).expect("valid config");
    let mut page = full_page();

    view.mount();
    view.on_tick();
    page.offset = 1_450.0;
    view.on_scroll(&page);
    assert_eq!(view.active_section(), SectionId::Skills);
    assert!(view.scroll_top_visible());
    view.unmount();

    view.mount();
    view.on_tick();
    assert_eq!(view.role_index(), 1);
    assert_eq!(view.active_section(), SectionId::Hero);
    assert!(!view.scroll_top_visible());
}
