//! CRART_AC portfolio page scripts.
//!
//! Rust + WASM frontend for the static portfolio: catalog gallery with
//! filters, curated cinema and polaroid sections, detail overlays, scroll
//! reveal and the contact form handoff. Page logic lives in `folio-core`;
//! the modules here bind it to the document.

pub mod api;
pub mod contact;
pub mod curated;
pub mod dom;
pub mod events;
pub mod gallery;
pub mod logging;
pub mod modal;
pub mod reveal;
pub mod state;

use tracing::{debug, info};
use wasm_bindgen::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    init().await
}

/// Startup sequence. Listeners are bound before the catalog request goes
/// out; the grid renders once it settles.
async fn init() -> Result<(), JsValue> {
    let config = state::read_config();
    let locale = state::page_locale(config.default_locale);
    state::install(config, locale);
    info!(?locale, "portfolio page starting");

    let els = dom::Elements::bind();
    apply_reduced_motion();

    let threshold = state::with(|s| s.config.reveal_threshold);
    reveal::init(threshold)?;

    events::bind_events(&els)?;
    events::spawn_catalog_load(&els);

    Ok(())
}

/// Mirror the reduced-motion preference as a class on `<html>`.
fn apply_reduced_motion() {
    let reduced = dom::window()
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    if reduced {
        if let Some(root) = dom::document().document_element() {
            dom::add_class(&root, "reduced-motion");
        }
        debug!("reduced motion requested");
    }
}
