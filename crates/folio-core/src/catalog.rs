//! Catalog loading: remote feed first, static cards merged in afterwards.
//!
//! Loading never fails. Transport errors, bad statuses and malformed JSON
//! fall back to the static cards; only a catalog that is still empty after
//! the merge becomes visible to the visitor (see `FilterState::show_load_result`).

use crate::error::FolioResult;
use async_trait::async_trait;
use folio_types::{ArtworkRecord, Availability};
use std::collections::HashSet;
use tracing::{info, warn};

const DEFAULT_COLLECTION: &str = "misc";
const FEED_KEY_PREFIX: &str = "feed-";

/// Where the page was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Network,
    LocalFile,
}

impl Origin {
    pub fn from_protocol(protocol: &str) -> Self {
        if protocol.trim_end_matches(':').eq_ignore_ascii_case("file") {
            Self::LocalFile
        } else {
            Self::Network
        }
    }
}

/// Fetches the raw feed body. Implementations map non-success statuses to
/// `FolioError::Status` and anything without a response to `FolioError::Transport`.
#[async_trait(?Send)]
pub trait FeedSource {
    async fn fetch(&self, url: &str) -> FolioResult<String>;
}

/// Attributes read from a `.art-card[data-static]` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCard {
    pub id: Option<String>,
    pub title: String,
    pub collection: Option<String>,
    pub year: Option<String>,
    pub technique: Option<String>,
    pub cover: Option<String>,
}

impl StaticCard {
    /// Synthesize a record. Cards without a usable `data-id` yield `None`.
    pub fn into_record(self) -> Option<ArtworkRecord> {
        let id = self.id.filter(|id| !id.trim().is_empty())?;
        let collection = self
            .collection
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLLECTION.to_owned());
        Some(ArtworkRecord {
            id,
            title: self.title.trim().to_owned(),
            tags: vec![collection.clone()],
            collection,
            year: self.year.unwrap_or_default(),
            technique: self.technique.unwrap_or_default(),
            size: String::new(),
            availability: Availability::Available,
            price_eur: None,
            cover: self.cover.unwrap_or_default(),
            story: String::new(),
        })
    }
}

/// Ordered, id-unique artwork list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
    ids: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the id is already present; the existing record is kept.
    pub fn insert(&mut self, record: ArtworkRecord) -> bool {
        if !self.ids.insert(record.id.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Adopt feed records in order. Records without an id get the key
    /// `feed-<index>` so each stays addressable; real ids are deduplicated.
    pub fn from_records(records: impl IntoIterator<Item = ArtworkRecord>) -> Self {
        let mut catalog = Self::new();
        for (index, mut record) in records.into_iter().enumerate() {
            if record.id.trim().is_empty() {
                record.id = format!("{FEED_KEY_PREFIX}{index}");
                warn!(key = %record.id, title = %record.title, "feed record without id");
            }
            if !catalog.insert(record) {
                warn!("duplicate artwork id in feed ignored");
            }
        }
        catalog
    }

    /// Additive merge of static cards: ids already present are skipped.
    pub fn merge_static(&mut self, cards: impl IntoIterator<Item = StaticCard>) -> usize {
        let mut added = 0;
        for card in cards {
            match card.into_record() {
                Some(record) => {
                    if self.insert(record) {
                        added += 1;
                    }
                }
                None => warn!("static card without data-id skipped"),
            }
        }
        added
    }

    pub fn get(&self, id: &str) -> Option<&ArtworkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    pub fn in_collection<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ArtworkRecord> + 'a {
        self.records.iter().filter(move |r| r.collection == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse the feed body. Only a body that is not a JSON array fails; each
/// element is read on its own and non-object elements are skipped.
pub fn parse_feed(body: &str) -> FolioResult<Vec<ArtworkRecord>> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, "feed element is not an object, skipped");
            continue;
        }
        match serde_json::from_value::<ArtworkRecord>(item) {
            Ok(record) => records.push(record),
            Err(err) => warn!(index, error = %err, "feed element unreadable, skipped"),
        }
    }
    Ok(records)
}

/// Append a cache-busting `cb` parameter.
pub fn cache_busted_url(url: &str, token: u64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}cb={token}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Feed,
    LocalFile,
    StaticFallback(String),
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub source: LoadSource,
    pub static_added: usize,
}

pub async fn load_catalog(
    origin: Origin,
    feed: &dyn FeedSource,
    url: &str,
    statics: Vec<StaticCard>,
) -> LoadReport {
    let (mut catalog, source) = match origin {
        Origin::LocalFile => {
            warn!("page opened from file://, using static cards only; serve the site to load the feed");
            (Catalog::new(), LoadSource::LocalFile)
        }
        Origin::Network => match fetch_feed(feed, url).await {
            Ok(records) => (Catalog::from_records(records), LoadSource::Feed),
            Err(err) => {
                warn!(error = %err, url, "artwork feed unavailable, falling back to static cards");
                (Catalog::new(), LoadSource::StaticFallback(err.to_string()))
            }
        },
    };

    let static_added = catalog.merge_static(statics);
    info!(
        total = catalog.len(),
        static_added,
        source = ?source,
        "artwork catalog ready"
    );

    LoadReport {
        catalog,
        source,
        static_added,
    }
}

async fn fetch_feed(feed: &dyn FeedSource, url: &str) -> FolioResult<Vec<ArtworkRecord>> {
    let body = feed.fetch(url).await?;
    parse_feed(&body)
}
