use folio_protocol::{SectionId, Theme, ViewState};
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::navigator;
use crate::platform::{Document, ThemeStore};
use crate::rotator::RoleRotator;
use crate::scroll::{GeometrySnapshot, ScrollObserver};
use crate::theme::ThemeToggle;

/// Derives the page's dynamic state from timer ticks and scroll events.
///
/// Frontends own the actual subscriptions. They call [`mount`] when they
/// start the interval and scroll listener, forward each firing to
/// [`on_tick`] / [`on_scroll`], and call [`unmount`] when they release
/// them. Events delivered while unmounted are dropped, so a callback that
/// was already queued at teardown cannot change state.
///
/// [`mount`]: ViewController::mount
/// [`unmount`]: ViewController::unmount
/// [`on_tick`]: ViewController::on_tick
/// [`on_scroll`]: ViewController::on_scroll
#[derive(Debug)]
pub struct ViewController<S> {
    config: Config,
    rotator: RoleRotator,
    scroll: ScrollObserver,
    theme: ThemeToggle<S>,
    mounted: bool,
}

impl<S: ThemeStore> ViewController<S> {
    pub fn new(config: Config, store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let rotator = RoleRotator::new(config.roles.len()).ok_or(ConfigError::NoRoles)?;
        let scroll = ScrollObserver::new(config.scroll_top_threshold, config.probe_line);
        Ok(Self {
            config,
            rotator,
            scroll,
            theme: ThemeToggle::new(store),
            mounted: false,
        })
    }

    /// Start accepting events and pick up the stored theme. Every mount
    /// starts from the first role, the hero section and a hidden
    /// scroll-top button.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.rotator.reset();
        self.scroll = ScrollObserver::new(self.config.scroll_top_threshold, self.config.probe_line);
        let theme = self.theme.load();
        self.mounted = true;
        info!(
            roles = self.rotator.len(),
            interval_ms = self.config.role_interval_ms,
            %theme,
            "view controller mounted"
        );
    }

    /// Stop accepting events.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        info!("view controller unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// One firing of the role interval. Returns whether the state changed.
    pub fn on_tick(&mut self) -> bool {
        if !self.mounted {
            debug!("dropping role tick after teardown");
            return false;
        }
        let before = self.rotator.index();
        self.rotator.advance() != before
    }

    /// One scroll event. Reads the offset and section geometry from `doc`.
    pub fn on_scroll<D: Document + ?Sized>(&mut self, doc: &D) -> bool {
        if !self.mounted {
            debug!("dropping scroll event after teardown");
            return false;
        }
        let geometry = GeometrySnapshot::capture(doc);
        self.scroll.observe(doc.scroll_offset(), &geometry)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Smooth-scroll to a section by element id. Unknown or missing
    /// sections are ignored; the active section only follows later scroll
    /// events.
    pub fn scroll_to_section<D: Document + ?Sized>(&self, doc: &mut D, id: &str) -> bool {
        navigator::scroll_to_section(doc, id)
    }

    pub fn scroll_to_top<D: Document + ?Sized>(&self, doc: &mut D) {
        navigator::scroll_to_top(doc);
    }

    pub fn role_index(&self) -> usize {
        self.rotator.index()
    }

    pub fn role(&self) -> &str {
        // validate() guarantees a non-empty list and the rotator keeps the
        // index in range.
        &self.config.roles[self.rotator.index()]
    }

    pub fn active_section(&self) -> SectionId {
        self.scroll.active()
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll.scroll_top_visible()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme_store(&self) -> &S {
        self.theme.store()
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            mounted: self.mounted,
            role_index: self.role_index(),
            role: self.role().to_owned(),
            active_section: self.active_section(),
            scroll_top_visible: self.scroll_top_visible(),
            theme: self.theme(),
        }
    }
}
