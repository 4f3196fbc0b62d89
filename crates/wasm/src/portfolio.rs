use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Config, SectionId, ViewController, ViewState};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::WebDocument;
use crate::render;
use crate::storage::{LocalStorageThemeStore, js_error};

/// What a click on the page asks for, decoded from the `data-section` /
/// `data-action` attributes of the nearest marked ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    ScrollTo(String),
    ScrollTop,
    ToggleTheme,
}

impl ClickAction {
    pub const SELECTOR: &'static str = "[data-section], [data-action]";

    pub fn from_attributes(section: Option<&str>, action: Option<&str>) -> Option<Self> {
        if let Some(section) = section {
            return Some(ClickAction::ScrollTo(section.to_owned()));
        }
        match action? {
            "scroll-top" => Some(ClickAction::ScrollTop),
            "toggle-theme" => Some(ClickAction::ToggleTheme),
            _ => None,
        }
    }
}

struct Shared {
    controller: ViewController<LocalStorageThemeStore>,
    page: WebDocument,
    rendered: Option<ViewState>,
}

impl Shared {
    fn render(&mut self) {
        let state = self.controller.state();
        if self.rendered.as_ref() == Some(&state) {
            return;
        }
        if let Err(e) = render::apply_state(self.page.document(), self.rendered.as_ref(), &state)
        {
            warn!("failed to render view state: {}", js_error(&e));
        }
        self.rendered = Some(state);
    }

    fn on_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::ScrollTo(id) => {
                self.controller.scroll_to_section(&mut self.page, &id);
            }
            ClickAction::ScrollTop => self.controller.scroll_to_top(&mut self.page),
            ClickAction::ToggleTheme => {
                self.controller.toggle_theme();
                self.render();
            }
        }
    }
}

/// Live event sources. Dropping this cancels the interval and detaches the
/// listeners before the closures are freed.
struct Subscriptions {
    window: web_sys::Window,
    document: web_sys::Document,
    interval: i32,
    _tick: Closure<dyn FnMut()>,
    scroll: Closure<dyn FnMut()>,
    click: Closure<dyn FnMut(web_sys::Event)>,
}

impl Subscriptions {
    fn attach(shared: &Rc<RefCell<Shared>>, interval_ms: u64) -> Result<Self, JsValue> {
        let (window, document) = {
            let shared = shared.borrow();
            (shared.page.window().clone(), shared.page.document().clone())
        };

        let tick = {
            let shared = Rc::clone(shared);
            Closure::<dyn FnMut()>::new(move || {
                let mut shared = shared.borrow_mut();
                if shared.controller.on_tick() {
                    shared.render();
                }
            })
        };

        let scroll = {
            let shared = Rc::clone(shared);
            Closure::<dyn FnMut()>::new(move || {
                let mut shared = shared.borrow_mut();
                let Shared {
                    controller, page, ..
                } = &mut *shared;
                if controller.on_scroll(&*page) {
                    shared.render();
                }
            })
        };

        let click = {
            let shared = Rc::clone(shared);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                let Some(action) = click_action(&event) else {
                    return;
                };
                event.prevent_default();
                shared.borrow_mut().on_click(action);
            })
        };

        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        let interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            timeout,
        )?;
        let subscriptions = Self {
            window,
            document,
            interval,
            _tick: tick,
            scroll,
            click,
        };
        // From here on a failure drops `subscriptions`, which detaches
        // whatever was already attached.
        subscriptions.window.add_event_listener_with_callback(
            "scroll",
            subscriptions.scroll.as_ref().unchecked_ref(),
        )?;
        subscriptions.document.add_event_listener_with_callback(
            "click",
            subscriptions.click.as_ref().unchecked_ref(),
        )?;
        Ok(subscriptions)
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.interval);
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        debug!("released interval and listeners");
    }
}

fn click_action(event: &web_sys::Event) -> Option<ClickAction> {
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let marked = target.closest(ClickAction::SELECTOR).ok()??;
    ClickAction::from_attributes(
        marked.get_attribute("data-section").as_deref(),
        marked.get_attribute("data-action").as_deref(),
    )
}

/// The portfolio page controller, as seen from JavaScript.
#[wasm_bindgen]
pub struct Portfolio {
    shared: Rc<RefCell<Shared>>,
    subscriptions: Option<Subscriptions>,
}

#[wasm_bindgen]
impl Portfolio {
    /// Create a controller for the current page. `config_json` may override
    /// any of the controller tunables; omitted fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Portfolio, JsError> {
        let config = match config_json.as_deref() {
            Some(text) => Config::from_json(text)?,
            None => Config::default(),
        };
        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("no document"))?;
        let controller = ViewController::new(config, LocalStorageThemeStore::default())?;
        Ok(Portfolio {
            shared: Rc::new(RefCell::new(Shared {
                controller,
                page: WebDocument::new(window, document),
                rendered: None,
            })),
            subscriptions: None,
        })
    }

    /// Fill the static content, start the role interval and the scroll and
    /// click listeners, and reveal the page. Calling it again is a no-op.
    pub fn mount(&mut self) -> Result<(), JsError> {
        if self.subscriptions.is_some() {
            return Ok(());
        }
        let interval_ms = {
            let mut shared = self.shared.borrow_mut();
            render::render_content(shared.page.document())
                .map_err(|e| JsError::new(&js_error(&e)))?;
            shared.controller.mount();
            shared.render();
            shared.controller.config().role_interval_ms
        };
        let subscriptions = Subscriptions::attach(&self.shared, interval_ms).map_err(|e| {
            self.shared.borrow_mut().controller.unmount();
            JsError::new(&js_error(&e))
        })?;
        self.subscriptions = Some(subscriptions);
        info!("portfolio mounted");
        Ok(())
    }

    /// Cancel the interval and detach all listeners. No callback changes
    /// state after this returns.
    pub fn unmount(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.controller.unmount();
        drop(self.subscriptions.take());
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Flip the theme; returns the new theme name.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        let mut shared = self.shared.borrow_mut();
        shared.on_click(ClickAction::ToggleTheme);
        shared.controller.theme().as_str().to_owned()
    }

    /// Smooth-scroll to a section by id. Unknown or missing sections are
    /// ignored; returns whether a scroll was requested.
    #[wasm_bindgen(js_name = scrollToSection)]
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        let mut shared = self.shared.borrow_mut();
        let Shared {
            controller, page, ..
        } = &mut *shared;
        controller.scroll_to_section(page, id)
    }

    #[wasm_bindgen(js_name = scrollToTop)]
    pub fn scroll_to_top(&mut self) {
        self.shared.borrow_mut().on_click(ClickAction::ScrollTop);
    }

    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> String {
        self.shared
            .borrow()
            .controller
            .active_section()
            .as_str()
            .to_owned()
    }

    /// Current view state as JSON.
    #[wasm_bindgen(js_name = viewState)]
    pub fn view_state(&self) -> Result<String, JsError> {
        let state = self.shared.borrow().controller.state();
        serde_json::to_string(&state).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Element ids of every section, in priority order.
#[wasm_bindgen(js_name = sectionIds)]
pub fn section_ids() -> Vec<String> {
    SectionId::ORDER
        .iter()
        .map(|id| id.as_str().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_attribute_wins() {
        assert_eq!(
            ClickAction::from_attributes(Some("projects"), Some("toggle-theme")),
            Some(ClickAction::ScrollTo("projects".into()))
        );
    }

    #[test]
    fn decodes_actions() {
        assert_eq!(
            ClickAction::from_attributes(None, Some("scroll-top")),
            Some(ClickAction::ScrollTop)
        );
        assert_eq!(
            ClickAction::from_attributes(None, Some("toggle-theme")),
            Some(ClickAction::ToggleTheme)
        );
    }

    #[test]
    fn unmarked_clicks_are_ignored() {
        assert_eq!(ClickAction::from_attributes(None, None), None);
        assert_eq!(ClickAction::from_attributes(None, Some("submit")), None);
    }

    #[test]
    fn section_ids_follow_order() {
        assert_eq!(
            section_ids(),
            [
                "hero",
                "about",
                "skills",
                "projects",
                "education",
                "certifications",
                "contact"
            ]
        );
    }
}
