//! Scroll reveal through an `IntersectionObserver`.
//!
//! Elements carrying `data-reveal` get a `data-reveal-key`; the first time a
//! keyed element intersects it gains `is-visible` and is unobserved. Browsers
//! without the observer reveal everything up front.

use crate::dom;
use crate::state;
use folio_core::reveal::{REVEAL_ATTR, REVEAL_KEY_ATTR, RevealAction, VISIBLE_CLASS};
use std::cell::RefCell;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

thread_local! {
    static OBSERVER: RefCell<Option<IntersectionObserver>> = const { RefCell::new(None) };
}

fn supported() -> bool {
    js_sys::Reflect::has(&dom::window(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn on_entries(entries: js_sys::Array, observer: IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let Some(key) = key_of(&target) else {
            continue;
        };
        let action = state::with_mut(|s| s.reveal.on_intersection(key, entry.is_intersecting()));
        if action == RevealAction::Reveal {
            dom::add_class(&target, VISIBLE_CLASS);
            observer.unobserve(&target);
        }
    }
}

/// Create the observer and watch every `data-reveal` element already in the
/// markup.
pub fn init(threshold: f64) -> Result<(), JsValue> {
    let marked = dom::query_all(&format!("[{REVEAL_ATTR}]"));
    if !supported() {
        debug!("IntersectionObserver unavailable, revealing immediately");
        OBSERVER.with(|o| *o.borrow_mut() = None);
        reveal_all(&marked);
        return Ok(());
    }

    let cb = Closure::wrap(
        Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();

    OBSERVER.with(|o| *o.borrow_mut() = Some(observer));
    observe(&marked);
    Ok(())
}

fn reveal_all(elements: &[Element]) {
    for el in elements {
        dom::add_class(el, VISIBLE_CLASS);
    }
}

fn key_of(el: &Element) -> Option<u32> {
    dom::attr(el, REVEAL_KEY_ATTR).and_then(|k| k.parse().ok())
}

/// Stop observing elements that left the page and drop their keys.
pub fn release(elements: &[Element]) {
    OBSERVER.with(|o| {
        if let Some(observer) = o.borrow().as_ref() {
            for el in elements {
                observer.unobserve(el);
            }
        }
    });
    let keys: Vec<u32> = elements.iter().filter_map(key_of).collect();
    if !keys.is_empty() {
        state::with_mut(|s| keys.iter().for_each(|key| s.reveal.release(*key)));
    }
}

/// Key and observe newly inserted elements.
pub fn observe(elements: &[Element]) {
    if elements.is_empty() {
        return;
    }
    let observed = OBSERVER.with(|o| {
        let guard = o.borrow();
        let Some(observer) = guard.as_ref() else {
            return false;
        };
        for el in elements {
            let key = state::with_mut(|s| s.reveal.register());
            dom::set_attr(el, REVEAL_KEY_ATTR, &key.to_string());
            observer.observe(el);
        }
        true
    });
    if !observed {
        if supported() {
            warn!(count = elements.len(), "reveal observer not initialised");
        }
        reveal_all(elements);
    }
}
