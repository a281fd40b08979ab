//! Event binding.
//!
//! Wires the page listeners that are not owned by a feature module. Async
//! work is spawned through `wasm_bindgen_futures::spawn_local`.

use crate::contact;
use crate::curated;
use crate::dom::{self, Elements};
use crate::gallery;
use crate::modal;
use crate::state;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Helper: attach a sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Navigation ──
    if let (Some(toggle), Some(menu)) = (&els.nav_toggle, &els.nav_menu) {
        dom::set_attr(toggle, "aria-expanded", "false");
        {
            let (toggle2, menu2) = (toggle.clone(), menu.clone());
            on_click!(toggle, move |_: web_sys::MouseEvent| {
                state::with_mut(|s| s.nav.toggle());
                render_nav(&toggle2, &menu2);
            });
        }
        for link in dom::query_all_within(menu, "a") {
            let (toggle2, menu2) = (toggle.clone(), menu.clone());
            on_click!(link, move |_: web_sys::MouseEvent| {
                state::with_mut(|s| s.nav.close());
                render_nav(&toggle2, &menu2);
            });
        }
    }

    // ── Filters ──
    for btn in &els.filter_buttons {
        let key = dom::attr(btn, "data-filter").unwrap_or_default();
        let els2 = els.clone();
        on_click!(btn, move |_: web_sys::MouseEvent| {
            gallery::apply_filter(&els2, &key);
        });
    }

    // ── Curated sections, presenters, contact ──
    curated::bind_sections()?;
    modal::bind_escape()?;
    contact::bind_form(els)?;

    Ok(())
}

fn render_nav(toggle: &Element, menu: &Element) {
    let (open, expanded) = state::with(|s| (s.nav.is_open(), s.nav.aria_expanded()));
    dom::toggle_class(menu, "open", open);
    dom::set_attr(toggle, "aria-expanded", expanded);
}

/// Load the catalog in the background; the first view renders when it
/// settles.
pub fn spawn_catalog_load(els: &Elements) {
    let els = els.clone();
    wasm_bindgen_futures::spawn_local(async move {
        gallery::load_and_render(&els).await;
    });
}
