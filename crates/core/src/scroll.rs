use folio_protocol::{Bounds, SectionId};

use crate::platform::Document;

/// Whether the scroll-to-top button should show. Strictly greater: an
/// offset equal to the threshold keeps it hidden.
pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Section bounds captured at one instant, indexed by [`SectionId`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometrySnapshot {
    bounds: [Option<Bounds>; SectionId::ORDER.len()],
}

impl GeometrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every section's bounds from the document.
    pub fn capture<D: Document + ?Sized>(doc: &D) -> Self {
        let mut snapshot = Self::new();
        for id in SectionId::ORDER {
            snapshot.bounds[id.index()] = doc.section_bounds(id);
        }
        snapshot
    }

    pub fn with(mut self, id: SectionId, bounds: Bounds) -> Self {
        self.set(id, Some(bounds));
        self
    }

    pub fn set(&mut self, id: SectionId, bounds: Option<Bounds>) {
        self.bounds[id.index()] = bounds;
    }

    pub fn get(&self, id: SectionId) -> Option<Bounds> {
        self.bounds[id.index()]
    }
}

/// Pick the section that covers the probe line.
///
/// Sections are tested in [`SectionId::ORDER`]; the first whose bounds
/// contain the line wins. Unmounted sections are skipped. When nothing
/// matches, `previous` is kept.
pub fn resolve_active_section(
    previous: SectionId,
    geometry: &GeometrySnapshot,
    probe_line: f64,
) -> SectionId {
    SectionId::ORDER
        .into_iter()
        .find(|&id| {
            geometry
                .get(id)
                .is_some_and(|bounds| bounds.contains_line(probe_line))
        })
        .unwrap_or(previous)
}

/// Nav highlighting and scroll-top visibility, updated per scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollObserver {
    threshold: f64,
    probe_line: f64,
    active: SectionId,
    scroll_top_visible: bool,
}

impl ScrollObserver {
    pub fn new(threshold: f64, probe_line: f64) -> Self {
        Self {
            threshold,
            probe_line,
            active: SectionId::default(),
            scroll_top_visible: false,
        }
    }

    /// Apply one scroll event. Returns whether anything observable changed.
    pub fn observe(&mut self, offset: f64, geometry: &GeometrySnapshot) -> bool {
        let visible = scroll_top_visible(offset, self.threshold);
        let active = resolve_active_section(self.active, geometry, self.probe_line);
        let changed = visible != self.scroll_top_visible || active != self.active;
        self.scroll_top_visible = visible;
        self.active = active;
        changed
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible
    }
}
