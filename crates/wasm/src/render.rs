use folio_core::content::{self, NavItem};
use folio_protocol::{SectionId, Theme, ViewState};
use wasm_bindgen::JsValue;

use crate::dom::{element, query_all};

pub const ROLE_ID: &str = "role";
pub const SCROLL_TOP_ID: &str = "scroll-top";
pub const APP_ID: &str = "app";

/// Bring the dynamic parts of the page in line with `state`.
///
/// Only the pieces that differ from `previous` are touched, so a scroll
/// event that changes nothing costs no DOM writes.
pub fn apply_state(
    document: &web_sys::Document,
    previous: Option<&ViewState>,
    state: &ViewState,
) -> Result<(), JsValue> {
    if previous.is_none_or(|prev| prev.mounted != state.mounted)
        && let Some(app) = element(document, APP_ID)
    {
        app.toggle_attribute_with_force("hidden", !state.mounted)?;
    }

    if previous.is_none_or(|prev| prev.role_index != state.role_index)
        && let Some(role) = element(document, ROLE_ID)
    {
        role.set_text_content(Some(&state.role));
    }

    if previous.is_none_or(|prev| prev.active_section != state.active_section) {
        for link in query_all(document, "nav [data-section]") {
            let active = link
                .get_attribute("data-section")
                .is_some_and(|id| id == state.active_section.as_str());
            link.class_list().toggle_with_force("active", active)?;
        }
    }

    if previous.is_none_or(|prev| prev.scroll_top_visible != state.scroll_top_visible)
        && let Some(button) = element(document, SCROLL_TOP_ID)
    {
        button.toggle_attribute_with_force("hidden", !state.scroll_top_visible)?;
    }

    if previous.is_none_or(|prev| prev.theme != state.theme)
        && let Some(root) = document.document_element()
    {
        root.set_attribute("data-theme", state.theme.as_str())?;
        root.class_list()
            .toggle_with_force("dark", state.theme == Theme::Dark)?;
    }

    Ok(())
}

/// Fill the list containers of the page skeleton from the static content.
pub fn render_content(document: &web_sys::Document) -> Result<(), JsValue> {
    if let Some(nav) = element(document, "nav-links") {
        fill_nav(document, &nav, content::NAV_ITEMS, "nav-link")?;
    }
    if let Some(actions) = element(document, "hero-actions") {
        fill_nav(document, &actions, content::HERO_ACTIONS, "button")?;
    }
    if let Some(strengths) = element(document, "core-strengths") {
        clear(&strengths);
        for &strength in content::CORE_STRENGTHS {
            strengths.append_child(&create(document, "li", "strength", Some(strength))?.into())?;
        }
    }
    if let Some(grid) = element(document, "skills-grid") {
        clear(&grid);
        for category in content::SKILLS {
            let card = create(document, "article", "card", None)?;
            card.append_child(&create(document, "h3", "card-title", Some(category.name))?.into())?;
            let badges = create(document, "div", "badges", None)?;
            for &skill in category.skills {
                badges.append_child(&create(document, "span", "badge", Some(skill))?.into())?;
            }
            card.append_child(&badges)?;
            grid.append_child(&card)?;
        }
    }
    if let Some(grid) = element(document, "projects-grid") {
        clear(&grid);
        for project in content::PROJECTS {
            let card = create(document, "article", "card project", None)?;
            card.append_child(&create(document, "h3", "card-title", Some(project.title))?.into())?;
            card.append_child(&create(document, "p", "muted", Some(project.description))?.into())?;
            let badges = create(document, "div", "badges", None)?;
            for &tech in project.tech {
                badges.append_child(&create(document, "span", "badge outline", Some(tech))?.into())?;
            }
            card.append_child(&badges)?;
            let links = create(document, "div", "links", None)?;
            links.append_child(&external_link(document, "Code", project.github)?.into())?;
            links.append_child(&external_link(document, "Demo", project.demo)?.into())?;
            card.append_child(&links)?;
            grid.append_child(&card)?;
        }
    }
    if let Some(list) = element(document, "certifications-list") {
        clear(&list);
        for &cert in content::CERTIFICATIONS {
            list.append_child(&create(document, "li", "card certification", Some(cert))?.into())?;
        }
    }
    if let Some(list) = element(document, "contact-links") {
        clear(&list);
        for link in content::CONTACT_LINKS {
            let anchor = if link.href.starts_with("mailto:") {
                let a = create(document, "a", "contact-link", Some(link.label))?;
                a.set_attribute("href", link.href)?;
                a
            } else {
                external_link(document, link.label, link.href)?
            };
            list.append_child(&anchor)?;
        }
    }
    Ok(())
}

fn fill_nav(
    document: &web_sys::Document,
    container: &web_sys::Element,
    items: &[NavItem],
    class: &str,
) -> Result<(), JsValue> {
    clear(container);
    for item in items {
        let button = create(document, "button", class, Some(item.label))?;
        button.set_attribute("type", "button")?;
        button.set_attribute("data-section", item.section.as_str())?;
        if item.section == SectionId::default() {
            button.class_list().add_1("active")?;
        }
        container.append_child(&button)?;
    }
    Ok(())
}

fn external_link(
    document: &web_sys::Document,
    text: &str,
    href: &str,
) -> Result<web_sys::Element, JsValue> {
    let a = create(document, "a", "link", Some(text))?;
    a.set_attribute("href", href)?;
    a.set_attribute("target", "_blank")?;
    a.set_attribute("rel", "noopener noreferrer")?;
    Ok(a)
}

fn create(
    document: &web_sys::Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> Result<web_sys::Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

fn clear(container: &web_sys::Element) {
    container.set_text_content(None);
}
