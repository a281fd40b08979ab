//! Card projection: one `ArtworkRecord` to the fields a grid tile shows.

use crate::config::PageConfig;
use crate::i18n;
use folio_types::{ArtworkRecord, Availability, Locale};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub image_src: String,
    pub image_alt: String,
    /// Present only for available works.
    pub badge: Option<&'static str>,
    pub caption: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl CardView {
    pub fn from_record(item: &ArtworkRecord, config: &PageConfig, locale: Locale) -> Self {
        Self {
            id: item.id.clone(),
            image_src: config.image_src(&item.cover),
            image_alt: item.title.clone(),
            badge: (item.availability == Availability::Available).then(|| i18n::badge_label(locale)),
            caption: join_meta(&[&item.year, &item.technique]),
            title: item.title.clone(),
            tags: item.tags.clone(),
        }
    }
}

/// Join non-empty parts with ` • `.
pub fn join_meta(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}
