//! Cinema and polaroid section items.

use crate::dom;
use crate::modal;
use folio_core::PresenterKind;
use folio_core::curated::{self, CuratedEntry};
use folio_types::Section;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

const CURATED_ID_ATTR: &str = "data-curated-id";

fn item_image(item: &Element) -> Option<Element> {
    dom::query_within(item, "img")
}

fn bind_item(img: &Element, kind: PresenterKind, entry: &'static CuratedEntry) -> Result<(), JsValue> {
    dom::set_style(img, "cursor", "pointer");
    dom::set_attr(img, "tabindex", "0");
    dom::set_attr(img, "role", "button");

    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        modal::open_curated(kind, entry);
    }) as Box<dyn FnMut(_)>);
    img.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
        if matches!(e.key().as_str(), "Enter" | " ") {
            e.prevent_default();
            modal::open_curated(kind, entry);
        }
    }) as Box<dyn FnMut(_)>);
    img.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Make every joined item in both sections open its presenter.
pub fn bind_sections() -> Result<(), JsValue> {
    for section in Section::ALL {
        let items = dom::query_all(curated::item_selector(section));
        let ids: Vec<Option<String>> = items.iter().map(|i| dom::attr(i, CURATED_ID_ATTR)).collect();
        let joined = curated::join_curated(curated::dataset(section), &ids);
        let kind = PresenterKind::for_section(section);

        let mut bound = 0;
        for (item, entry) in items.iter().zip(joined) {
            let (Some(entry), Some(img)) = (entry, item_image(item)) else {
                continue;
            };
            bind_item(&img, kind, entry)?;
            bound += 1;
        }
        debug!(section = section.key(), bound, items = items.len(), "curated items bound");
    }
    Ok(())
}
