//! Localized page strings (Italian default, English when `<html lang="en">`).

use folio_types::{Availability, Locale};

/// Status chip label. Only `Sold` reads as sold; everything else reads as available.
pub fn status_label(locale: Locale, status: Availability) -> &'static str {
    match (locale, status) {
        (Locale::It, Availability::Sold) => "VENDUTO",
        (Locale::En, Availability::Sold) => "SOLD",
        (Locale::It, _) => "DISPONIBILE",
        (Locale::En, _) => "AVAILABLE",
    }
}

/// Card badge for available works.
pub fn badge_label(locale: Locale) -> &'static str {
    match locale {
        Locale::It => "Disponibile",
        Locale::En => "Available",
    }
}

pub fn form_incomplete(locale: Locale) -> &'static str {
    match locale {
        Locale::It => "Compila tutti i campi.",
        Locale::En => "Please fill in all fields.",
    }
}

pub fn catalog_unavailable(locale: Locale) -> &'static str {
    match locale {
        Locale::It => "Impossibile caricare le opere e nessun fallback trovato.",
        Locale::En => "Unable to load the artworks and no fallback was found.",
    }
}

pub fn commission_button(locale: Locale) -> &'static str {
    match locale {
        Locale::It => "Richiedi info",
        Locale::En => "Request info",
    }
}

pub fn commission_message(locale: Locale, artwork_id: &str) -> String {
    match locale {
        Locale::It => format!("Richiesta informazioni per opera: {artwork_id}"),
        Locale::En => format!("Information request for artwork: {artwork_id}"),
    }
}

pub fn close_label(locale: Locale) -> &'static str {
    match locale {
        Locale::It => "Chiudi",
        Locale::En => "Close",
    }
}

/// Field labels used in the mail body: (name, message).
pub fn mail_labels(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::It => ("Nome", "Messaggio"),
        Locale::En => ("Name", "Message"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_follow_locale() {
        assert_eq!(status_label(Locale::It, Availability::Sold), "VENDUTO");
        assert_eq!(status_label(Locale::En, Availability::Sold), "SOLD");
        assert_eq!(status_label(Locale::It, Availability::Available), "DISPONIBILE");
        assert_eq!(status_label(Locale::En, Availability::Unspecified), "AVAILABLE");
    }

    #[test]
    fn commission_message_names_artwork() {
        assert_eq!(
            commission_message(Locale::It, "vertigo"),
            "Richiesta informazioni per opera: vertigo"
        );
        assert!(commission_message(Locale::En, "vertigo").ends_with("vertigo"));
    }
}
