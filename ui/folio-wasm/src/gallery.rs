//! Gallery: catalog load, filter selectors and card tiles.

use crate::api::{self, BrowserFeed};
use crate::dom::{self, Elements};
use crate::modal;
use crate::reveal;
use crate::state;
use folio_core::card::CardView;
use folio_core::catalog::{StaticCard, cache_busted_url};
use folio_core::reveal::{REVEAL_ATTR, REVEAL_KEY_ATTR};
use folio_core::{GalleryView, PageConfig, load_catalog};
use folio_types::{ArtworkRecord, Locale, Section};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

const GRID_ERROR_STYLE: &str = "padding:1rem;font-size:.85rem;color:#c54124;";

/// `GalleryView` over the real document.
pub struct DomGallery<'a> {
    els: &'a Elements,
    config: &'a PageConfig,
    locale: Locale,
    rendered: Vec<Element>,
    removed: Vec<Element>,
}

impl<'a> DomGallery<'a> {
    pub fn new(els: &'a Elements, config: &'a PageConfig, locale: Locale) -> Self {
        Self {
            els,
            config,
            locale,
            rendered: Vec::new(),
            removed: Vec::new(),
        }
    }

    fn clear_grid(&mut self, grid: &Element) {
        self.removed
            .extend(dom::query_all_within(grid, &format!("[{REVEAL_KEY_ATTR}]")));
        grid.set_inner_html("");
    }

    /// Tiles created since the last call, for the reveal observer.
    pub fn take_rendered(&mut self) -> Vec<Element> {
        std::mem::take(&mut self.rendered)
    }

    /// Observed tiles dropped from the grid since the last call.
    pub fn take_removed(&mut self) -> Vec<Element> {
        std::mem::take(&mut self.removed)
    }
}

impl GalleryView for DomGallery<'_> {
    fn set_grid_visible(&mut self, visible: bool) {
        if let Some(grid) = &self.els.art_grid {
            dom::set_style(grid, "display", if visible { "" } else { "none" });
        }
    }

    fn set_section_active(&mut self, section: Section, active: bool) {
        if let Some(el) = self.els.section(section) {
            dom::toggle_class(el, "active", active);
        }
    }

    fn render_grid(&mut self, items: &[ArtworkRecord]) {
        let Some(grid) = self.els.art_grid.clone() else {
            return;
        };
        self.clear_grid(&grid);
        for item in items {
            let view = CardView::from_record(item, self.config, self.locale);
            match create_card(&view) {
                Ok(card) => {
                    if grid.append_child(&card).is_ok() {
                        self.rendered.push(card);
                    }
                }
                Err(err) => warn!(id = %item.id, error = ?err, "card could not be created"),
            }
        }
    }

    fn highlight_filter(&mut self, key: &str) {
        for btn in &self.els.filter_buttons {
            let matches = dom::attr(btn, "data-filter").as_deref() == Some(key);
            dom::toggle_class(btn, "is-active", matches);
        }
    }

    fn show_catalog_error(&mut self, message: &str) {
        let Some(grid) = self.els.art_grid.clone() else {
            return;
        };
        self.clear_grid(&grid);
        if let Ok(p) = dom::create_text_element("p", "gallery-error", message) {
            dom::set_attr(&p, "style", GRID_ERROR_STYLE);
            let _ = grid.append_child(&p);
        }
    }
}

/// Build one `<article class="art-card">` tile. Feed text goes through text
/// nodes only.
pub fn create_card(view: &CardView) -> Result<Element, JsValue> {
    let card = dom::create_element("article")?;
    card.set_class_name("art-card");
    dom::set_attr(&card, REVEAL_ATTR, "");
    dom::set_attr(&card, "data-id", &view.id);

    let figure = dom::create_element("figure")?;
    let img = dom::create_element("img")?;
    dom::set_attr(&img, "src", &view.image_src);
    dom::set_attr(&img, "alt", &view.image_alt);
    dom::set_attr(&img, "loading", "lazy");
    dom::set_attr(&img, "width", "400");
    dom::set_attr(&img, "height", "560");
    figure.append_child(&img)?;
    if let Some(badge) = view.badge {
        figure.append_child(&dom::create_text_element("span", "badge", badge)?.into())?;
    }
    let overlay = dom::create_element("div")?;
    overlay.set_class_name("overlay");
    overlay.append_child(&dom::create_text_element("span", "", &view.caption)?.into())?;
    figure.append_child(&overlay)?;
    card.append_child(&figure)?;

    let meta = dom::create_element("div")?;
    meta.set_class_name("meta");
    meta.append_child(&dom::create_text_element("h4", "", &view.title)?.into())?;
    let tags = dom::create_element("div")?;
    tags.set_class_name("tags");
    for tag in &view.tags {
        tags.append_child(&dom::create_text_element("span", "tag", tag)?.into())?;
    }
    meta.append_child(&tags)?;
    card.append_child(&meta)?;

    let id = view.id.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        modal::open_artwork(&id);
    }) as Box<dyn FnMut(_)>);
    card.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(card)
}

/// Read the `.art-card[data-static]` cards declared in the grid markup.
pub fn read_static_cards(els: &Elements) -> Vec<StaticCard> {
    let Some(grid) = &els.art_grid else {
        return Vec::new();
    };
    dom::query_all_within(grid, ".art-card[data-static]")
        .iter()
        .map(|card| StaticCard {
            id: dom::attr(card, "data-id"),
            title: dom::query_within(card, "h4")
                .map(|h| dom::text_of(&h))
                .unwrap_or_default(),
            collection: dom::attr(card, "data-collection"),
            year: dom::attr(card, "data-year"),
            technique: dom::attr(card, "data-technique"),
            cover: dom::attr(card, "data-cover"),
        })
        .collect()
}

/// Apply a filter key and hand any new tiles to the reveal observer.
pub fn apply_filter(els: &Elements, key: &str) {
    let (removed, rendered) = state::with_mut(|s| {
        let mut gallery = DomGallery::new(els, &s.config, s.locale);
        s.filter.apply(key, &mut gallery);
        (gallery.take_removed(), gallery.take_rendered())
    });
    reveal::release(&removed);
    reveal::observe(&rendered);
}

/// Load the catalog, then show the first view. Rendering waits for the load
/// to settle.
pub async fn load_and_render(els: &Elements) {
    let statics = read_static_cards(els);
    let url = state::with(|s| cache_busted_url(&s.config.feed_url, api::cache_token()));
    let report = load_catalog(api::origin(), &BrowserFeed, &url, statics).await;

    let (removed, rendered) = state::with_mut(|s| {
        let locale = s.locale;
        let mut gallery = DomGallery::new(els, &s.config, locale);
        s.filter.show_load_result(report, locale, &mut gallery);
        (gallery.take_removed(), gallery.take_rendered())
    });
    reveal::release(&removed);
    reveal::observe(&rendered);
}
