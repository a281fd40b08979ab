//! Detail content shown by the presenters.

use crate::card::join_meta;
use crate::config::PageConfig;
use crate::curated::CuratedEntry;
use crate::i18n;
use folio_types::{ArtworkRecord, Availability, Locale};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTag {
    /// e.g. `600 €`
    pub amount: String,
    pub status_class: &'static str,
    pub status_label: &'static str,
}

impl PriceTag {
    pub fn new(amount: String, status: Availability, locale: Locale) -> Self {
        Self {
            amount,
            status_class: status.css_class(),
            status_label: i18n::status_label(locale, status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    /// Artworks: `year • technique • size`. Curated entries: the technique.
    pub meta: String,
    pub subtitle: Option<String>,
    pub size: Option<String>,
    pub story: Option<String>,
    pub price: Option<PriceTag>,
    /// Artwork id carried by the "request info" action.
    pub commission_id: Option<String>,
}

impl DetailContent {
    pub fn artwork(item: &ArtworkRecord, config: &PageConfig, locale: Locale) -> Self {
        Self {
            title: item.title.clone(),
            image_src: config.image_src(&item.cover),
            image_alt: item.title.clone(),
            meta: join_meta(&[&item.year, &item.technique, &item.size]),
            subtitle: None,
            size: None,
            story: non_empty(&item.story),
            price: item
                .price_eur
                .map(|p| PriceTag::new(format_eur(p), item.availability, locale)),
            commission_id: Some(item.id.clone()).filter(|id| !id.is_empty()),
        }
    }

    pub fn curated(entry: &CuratedEntry, locale: Locale) -> Self {
        Self {
            title: entry.title.to_owned(),
            image_src: entry.img.to_owned(),
            image_alt: entry.title.to_owned(),
            meta: entry.technique.to_owned(),
            subtitle: entry.subtitle.map(str::to_owned),
            size: non_empty(entry.size),
            story: None,
            price: Some(PriceTag::new(
                format_eur(f64::from(entry.price_eur)),
                entry.status,
                locale,
            )),
            commission_id: None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Whole euros print without decimals, anything else with two.
pub fn format_eur(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0} €")
    } else {
        format!("{amount:.2} €")
    }
}
