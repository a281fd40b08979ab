//! Global page state.
//!
//! One `PageState` in a `RefCell`-wrapped `thread_local!` (WASM is
//! single-threaded). Callers must not re-enter `with_mut` from inside a
//! closure passed to it; DOM callbacks run later, on their own turn.

use crate::dom;
use folio_core::{PageConfig, PageState};
use folio_types::Locale;
use std::cell::RefCell;
use tracing::warn;

const CONFIG_ELEMENT_ID: &str = "folioConfig";

thread_local! {
    static PAGE: RefCell<PageState> = RefCell::new(PageState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&PageState) -> R,
{
    PAGE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut PageState) -> R,
{
    PAGE.with(|s| f(&mut s.borrow_mut()))
}

pub fn install(config: PageConfig, locale: Locale) {
    with_mut(|s| *s = PageState::new(config, locale));
}

pub fn locale() -> Locale {
    with(|s| s.locale)
}

/// Read the optional inline `<script type="application/json" id="folioConfig">`.
pub fn read_config() -> PageConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).map(|el| dom::text_of(&el)) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "ignoring invalid page configuration");
            PageConfig::default()
        }
    }
}

/// Locale declared on `<html lang>`.
pub fn page_locale(fallback: Locale) -> Locale {
    let lang = dom::document()
        .document_element()
        .and_then(|root| root.get_attribute("lang"));
    Locale::from_lang(lang.as_deref(), fallback)
}
