//! Contact form handoff and the "request info" action of the artwork
//! presenter.

use crate::dom::{self, Elements};
use crate::modal;
use crate::state;
use folio_core::contact::{self, ContactForm};
use folio_core::i18n;
use folio_core::{Dismissal, FolioError, PresenterKind};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

fn read_form(els: &Elements) -> ContactForm {
    ContactForm {
        name: els.contact_name.as_ref().map(|i| i.value()).unwrap_or_default(),
        email: els.contact_email.as_ref().map(|i| i.value()).unwrap_or_default(),
        message: els.contact_message.as_ref().map(|t| t.value()).unwrap_or_default(),
    }
}

fn set_status(els: &Elements, text: &str) {
    if let Some(status) = &els.form_status {
        dom::set_text(status, text);
    }
}

fn on_submit(els: &Elements) {
    let form = read_form(els);
    let result = state::with(|s| contact::submit(&form, &s.config, s.locale));
    match result {
        Ok(url) => {
            set_status(els, "");
            info!("handing contact message to the mail client");
            if let Err(err) = dom::window().location().set_href(&url) {
                warn!(error = ?err, "mail client handoff failed");
            }
        }
        Err(FolioError::MissingField(field)) => {
            set_status(els, i18n::form_incomplete(state::locale()));
            debug!(%field, "contact form incomplete");
        }
        Err(err) => warn!(error = %err, "contact form rejected"),
    }
}

pub fn bind_form(els: &Elements) -> Result<(), JsValue> {
    let Some(form) = &els.contact_form else {
        return Ok(());
    };
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        on_submit(&els2);
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Prefill the message with the open artwork, close the presenter and bring
/// the form into view.
pub fn request_commission() {
    let Some(message) = state::with(|s| s.commission_message()) else {
        return;
    };
    let els = Elements::bind();
    if let Some(textarea) = &els.contact_message {
        textarea.set_value(&message);
        let _ = textarea.focus();
    }
    modal::dismiss(PresenterKind::Artwork, Dismissal::CloseControl);
    if let Some(title) = &els.contact_title {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        title.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
