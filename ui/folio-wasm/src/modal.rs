//! Detail overlays for the artwork, cinema and polaroid presenters.
//!
//! Each overlay is built on first use and reused afterwards. Lifecycle
//! decisions live in `folio_core::presenter`; this module only touches the
//! DOM and schedules the two deferred steps (entry on the next animation
//! frame, hide after the close delay).

use crate::contact;
use crate::dom;
use crate::state;
use folio_core::curated::CuratedEntry;
use folio_core::detail::{DetailContent, PriceTag};
use folio_core::i18n;
use folio_core::presenter::{CloseTicket, EnterTicket};
use folio_core::{Dismissal, FolioResult, OverlayView, PresenterKind, ScrollHost};
use folio_types::Locale;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Class-level layout of one overlay kind.
struct Parts {
    dialog: &'static str,
    img: &'static str,
    title: &'static str,
    meta: &'static str,
    subtitle: Option<&'static str>,
    size: Option<&'static str>,
    price: &'static str,
    story: Option<&'static str>,
    commission: Option<&'static str>,
}

fn parts(kind: PresenterKind) -> Parts {
    match kind {
        PresenterKind::Artwork => Parts {
            dialog: ".modal",
            img: ".modal-media img",
            title: ".modal-info h4",
            meta: ".modal-meta",
            subtitle: None,
            size: None,
            price: ".modal-price",
            story: Some(".modal-story"),
            commission: Some(".modal-commission"),
        },
        PresenterKind::Cinema => Parts {
            dialog: ".cm-dialog",
            img: ".cm-media img",
            title: ".cm-title",
            meta: ".cm-tech",
            subtitle: None,
            size: Some(".cm-size"),
            price: ".cm-price",
            story: None,
            commission: None,
        },
        PresenterKind::Polaroid => Parts {
            dialog: ".pl-dialog",
            img: ".pl-media img",
            title: ".pl-title",
            meta: ".pl-tech",
            subtitle: Some(".pl-sub"),
            size: Some(".pl-size"),
            price: ".pl-price",
            story: None,
            commission: None,
        },
    }
}

fn skeleton(kind: PresenterKind, locale: Locale) -> String {
    let close = i18n::close_label(locale);
    match kind {
        PresenterKind::Artwork => format!(
            r#"
    <div class="modal-backdrop" data-close></div>
    <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modalTitle">
      <button class="modal-close" aria-label="{close}" data-close>&times;</button>
      <div class="modal-content">
        <div class="modal-media"><img src="" alt="" /></div>
        <div class="modal-info">
          <h4 id="modalTitle"></h4>
          <p class="modal-meta"></p>
          <p class="modal-price"></p>
          <p class="modal-story"></p>
          <button type="button" class="btn primary modal-commission"></button>
        </div>
      </div>
    </div>"#
        ),
        PresenterKind::Cinema => format!(
            r#"
    <div class="cm-backdrop" data-cm-close></div>
    <div class="cm-dialog" role="dialog" aria-modal="true" aria-label="Dettaglio opera cinema">
      <button class="cm-close" aria-label="{close}" data-cm-close>&times;</button>
      <div class="cm-media"><img src="" alt="Opera cinema" /></div>
      <div class="cm-info">
        <h4 class="cm-title"></h4>
        <p class="cm-tech"></p>
        <p class="cm-size"></p>
        <p class="cm-price"></p>
      </div>
    </div>"#
        ),
        PresenterKind::Polaroid => format!(
            r#"
    <div class="pm-backdrop" data-pl-close></div>
    <div class="pl-dialog" role="dialog" aria-modal="true" aria-label="Dettaglio opera polaroid">
      <button class="pl-close" aria-label="{close}" data-pl-close>&times;</button>
      <div class="pl-media"><img src="" alt="Opera polaroid" /></div>
      <div class="pl-info">
        <h4 class="pl-title"></h4>
        <p class="pl-tech"></p>
        <p class="pl-sub"></p>
        <p class="pl-size"></p>
        <p class="pl-price"></p>
      </div>
    </div>"#
        ),
    }
}

fn overlay(kind: PresenterKind) -> Option<Element> {
    dom::by_id(kind.overlay_id())
}

fn part(kind: PresenterKind, selector: &str) -> Option<Element> {
    overlay(kind).and_then(|root| dom::query_within(&root, selector))
}

fn fill(kind: PresenterKind, selector: Option<&str>, text: Option<&str>) {
    if let Some(el) = selector.and_then(|s| part(kind, s)) {
        dom::set_text(&el, text.unwrap_or_default());
    }
}

fn fill_price(el: &Element, price: Option<&PriceTag>) {
    el.set_inner_html("");
    let Some(price) = price else {
        return;
    };
    let _ = el.append_with_str_1(&format!("{} ", price.amount));
    if let Ok(status) = dom::create_text_element(
        "span",
        &format!("status {}", price.status_class),
        &format!("= {}", price.status_label),
    ) {
        let _ = el.append_child(&status);
    }
}

/// `OverlayView` + `ScrollHost` over the real document. Used from inside
/// `state::with_mut`, so it carries what it needs instead of reading state.
pub struct DomOverlays {
    locale: Locale,
}

impl DomOverlays {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl OverlayView for DomOverlays {
    fn build(&mut self, kind: PresenterKind) {
        if overlay(kind).is_some() {
            return;
        }
        if let Err(err) = build_overlay(kind, self.locale) {
            warn!(kind = %kind, error = ?err, "overlay could not be built");
        }
    }

    fn populate(&mut self, kind: PresenterKind, content: &DetailContent) {
        let p = parts(kind);
        if let Some(img) = part(kind, p.img) {
            dom::set_attr(&img, "src", &content.image_src);
            dom::set_attr(&img, "alt", &content.image_alt);
        }
        fill(kind, Some(p.title), Some(&content.title));
        fill(kind, Some(p.meta), Some(&content.meta));
        fill(kind, p.subtitle, content.subtitle.as_deref());
        fill(kind, p.size, content.size.as_deref());
        fill(kind, p.story, content.story.as_deref());
        if let Some(el) = part(kind, p.price) {
            fill_price(&el, content.price.as_ref());
        }
        if let Some(btn) = p.commission.and_then(|s| part(kind, s)) {
            let visible = content.commission_id.is_some();
            dom::set_style(&btn, "display", if visible { "" } else { "none" });
        }
    }

    fn set_visible(&mut self, kind: PresenterKind, visible: bool) {
        if let Some(root) = overlay(kind) {
            dom::toggle_class(&root, "open", visible);
        }
    }

    fn set_entered(&mut self, kind: PresenterKind, entered: bool) {
        if let Some(dialog) = part(kind, parts(kind).dialog) {
            dom::toggle_class(&dialog, "in", entered);
        }
    }
}

impl ScrollHost for DomOverlays {
    fn set_scroll_locked(&mut self, locked: bool) {
        let style = dom::body().style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

fn build_overlay(kind: PresenterKind, locale: Locale) -> Result<(), JsValue> {
    let root = dom::create_element("div")?;
    root.set_id(kind.overlay_id());
    root.set_inner_html(&skeleton(kind, locale));

    if let Some(btn) = parts(kind).commission.and_then(|s| dom::query_within(&root, s)) {
        dom::set_text(&btn, i18n::commission_button(locale));
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            contact::request_commission();
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let marker = kind.close_marker();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !target.has_attribute(marker) {
            return;
        }
        let trigger = if target.tag_name().eq_ignore_ascii_case("button") {
            Dismissal::CloseControl
        } else {
            Dismissal::Backdrop
        };
        dismiss(kind, trigger);
    }) as Box<dyn FnMut(_)>);
    root.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    dom::body().append_child(&root)?;
    debug!(kind = %kind, "overlay built");
    Ok(())
}

// ── Lifecycle scheduling ──

fn after_open(result: FolioResult<EnterTicket>) {
    match result {
        Ok(ticket) => schedule_enter(ticket),
        Err(err) => warn!(error = %err, "presenter did not open"),
    }
}

fn enter(ticket: EnterTicket) {
    state::with_mut(|s| {
        let mut view = DomOverlays::new(s.locale);
        s.enter(ticket, &mut view)
    });
}

fn schedule_enter(ticket: EnterTicket) {
    let cb = Closure::once_into_js(move || {
        enter(ticket);
    });
    if dom::window()
        .request_animation_frame(cb.unchecked_ref())
        .is_err()
    {
        enter(ticket);
    }
}

fn schedule_close(ticket: CloseTicket) {
    Timeout::new(ticket.delay_ms, move || {
        state::with_mut(|s| s.finish_close(ticket, &mut DomOverlays::new(s.locale)));
    })
    .forget();
}

pub fn open_artwork(id: &str) {
    match state::with_mut(|s| s.open_artwork(id, &mut DomOverlays::new(s.locale))) {
        Ok(Some(ticket)) => schedule_enter(ticket),
        Ok(None) => {}
        Err(err) => warn!(error = %err, "artwork presenter did not open"),
    }
}

pub fn open_curated(kind: PresenterKind, entry: &CuratedEntry) {
    after_open(state::with_mut(|s| s.open_curated(kind, entry, &mut DomOverlays::new(s.locale))));
}

pub fn dismiss(kind: PresenterKind, trigger: Dismissal) {
    if let Some(ticket) = state::with_mut(|s| s.dismiss(kind, trigger, &mut DomOverlays::new(s.locale))) {
        schedule_close(ticket);
    }
}

/// One document-level Escape listener for every presenter.
pub fn bind_escape() -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
        if e.key() != "Escape" {
            return;
        }
        let tickets = state::with_mut(|s| s.dismiss_all(Dismissal::Escape, &mut DomOverlays::new(s.locale)));
        for ticket in tickets {
            schedule_close(ticket);
        }
    }) as Box<dyn FnMut(_)>);
    dom::document().add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
