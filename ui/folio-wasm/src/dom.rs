//! DOM element bindings.
//!
//! Page regions are resolved once at startup. Every region is optional:
//! a page without a contact form or without the curated sections still
//! boots, it just skips the matching feature.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let Ok(nl) = list else {
        return Vec::new();
    };
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(el) = nl.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            v.push(el);
        }
    }
    v
}

pub fn query_all(selector: &str) -> Vec<Element> {
    collect(doc().query_selector_all(selector))
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    collect(parent.query_selector_all(selector))
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    let _ = el.set_attribute(name, value);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    doc().create_element(tag)
}

/// Create `<tag class="..">text</tag>`.
pub fn create_text_element(tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    set_text(&el, text);
    Ok(el)
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

// ── Elements struct ──

/// DOM references used by the page scripts.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Navigation
    pub nav_toggle: Option<Element>,
    pub nav_menu: Option<Element>,

    // Gallery
    pub art_grid: Option<Element>,
    pub cinema_section: Option<Element>,
    pub polaroid_section: Option<Element>,
    pub filter_buttons: Vec<Element>,

    // Contact
    pub contact_form: Option<HtmlFormElement>,
    pub contact_name: Option<HtmlInputElement>,
    pub contact_email: Option<HtmlInputElement>,
    pub contact_message: Option<HtmlTextAreaElement>,
    pub form_status: Option<Element>,
    pub contact_title: Option<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind() -> Elements {
        let contact_form = query(".contact-form").and_then(|f| f.dyn_into::<HtmlFormElement>().ok());
        let form_status = contact_form
            .as_ref()
            .and_then(|f| query_within(f, ".form-status"));
        Elements {
            nav_toggle: query(".nav-toggle"),
            nav_menu: by_id("navMenu"),

            art_grid: by_id("artGrid"),
            cinema_section: by_id("cinema"),
            polaroid_section: by_id("polaroid"),
            filter_buttons: query_all(".filter-btn"),

            contact_form,
            contact_name: by_id_typed("nome"),
            contact_email: by_id_typed("email"),
            contact_message: by_id_typed("messaggio"),
            form_status,
            contact_title: by_id("contactTitle"),
        }
    }

    pub fn section(&self, section: folio_types::Section) -> Option<&Element> {
        match section {
            folio_types::Section::Cinema => self.cinema_section.as_ref(),
            folio_types::Section::Polaroid => self.polaroid_section.as_ref(),
        }
    }
}
