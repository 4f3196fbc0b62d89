use folio_protocol::SectionId;
use tracing::debug;

use crate::platform::Document;

/// Smooth-scroll to the section named by `id`.
///
/// An unknown id or a section whose element is missing is ignored. Returns
/// whether a scroll was requested.
pub fn scroll_to_section<D: Document + ?Sized>(doc: &mut D, id: &str) -> bool {
    let Ok(section) = id.parse::<SectionId>() else {
        debug!("ignoring scroll to unknown section {id:?}");
        return false;
    };
    scroll_to(doc, section)
}

pub fn scroll_to<D: Document + ?Sized>(doc: &mut D, section: SectionId) -> bool {
    let requested = doc.scroll_into_view(section);
    if !requested {
        debug!("section {section} is not mounted, skipping scroll");
    }
    requested
}

pub fn scroll_to_top<D: Document + ?Sized>(doc: &mut D) {
    doc.scroll_to_top();
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::Bounds;

    #[derive(Default)]
    struct Recorder {
        mounted: Vec<SectionId>,
        scrolled: Vec<SectionId>,
        to_top: usize,
    }

    impl Document for Recorder {
        fn section_bounds(&self, id: SectionId) -> Option<Bounds> {
            self.mounted
                .contains(&id)
                .then(|| Bounds::new(0.0, 100.0))
        }

        fn scroll_offset(&self) -> f64 {
            0.0
        }

        fn scroll_to_top(&mut self) {
            self.to_top += 1;
        }

        fn scroll_into_view(&mut self, id: SectionId) -> bool {
            if self.mounted.contains(&id) {
                self.scrolled.push(id);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn scrolls_to_mounted_section() {
        let mut doc = Recorder {
            mounted: vec![SectionId::Projects],
            ..Recorder::default()
        };
        assert!(scroll_to_section(&mut doc, "projects"));
        assert_eq!(doc.scrolled, [SectionId::Projects]);
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut doc = Recorder::default();
        assert!(!scroll_to_section(&mut doc, "blog"));
        assert!(doc.scrolled.is_empty());
    }

    #[test]
    fn missing_element_is_noop() {
        let mut doc = Recorder {
            mounted: vec![SectionId::Hero],
            ..Recorder::default()
        };
        assert!(!scroll_to_section(&mut doc, "contact"));
        assert!(doc.scrolled.is_empty());
    }

    #[test]
    fn scroll_to_top_delegates() {
        let mut doc = Recorder::default();
        scroll_to_top(&mut doc);
        assert_eq!(doc.to_top, 1);
    }
}
