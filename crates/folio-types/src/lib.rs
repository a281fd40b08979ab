use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    Available,
    Sold,
    #[default]
    Unspecified,
}

impl Availability {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "available" => Self::Available,
            "sold" => Self::Sold,
            _ => Self::Unspecified,
        }
    }

    /// CSS class used by the status chip in price tags.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Unspecified => "unspecified",
        }
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Scalar>::deserialize(deserializer)? {
            Some(Scalar::Text(raw)) => Self::parse(&raw),
            _ => Self::Unspecified,
        })
    }
}

/// One artwork as published by `artworks.json` or synthesized from a static card.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ArtworkRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub collection: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub technique: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub size: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default, rename = "priceEUR", deserialize_with = "lenient_price")]
    pub price_eur: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cover: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub story: String,
}

/// The two curated, non-filterable display areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Cinema,
    Polaroid,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Cinema, Section::Polaroid];

    /// Filter key and section element id (`#cinema`, `#polaroid`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Cinema => "cinema",
            Self::Polaroid => "polaroid",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "cinema" => Some(Self::Cinema),
            "polaroid" => Some(Self::Polaroid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    All,
    Section(Section),
    Collection(String),
}

impl FilterKey {
    pub const ALL_KEY: &'static str = "all";

    pub fn parse(raw: &str) -> Self {
        let key = raw.trim();
        if key == Self::ALL_KEY {
            return Self::All;
        }
        match Section::from_key(key) {
            Some(section) => Self::Section(section),
            None => Self::Collection(key.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Section(section) => section.key(),
            Self::Collection(key) => key,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    It,
    En,
}

impl Locale {
    /// Resolve a document `lang` attribute. Only the primary subtag matters.
    pub fn from_lang(lang: Option<&str>, fallback: Locale) -> Self {
        let primary = lang
            .map(str::trim)
            .and_then(|l| l.split(['-', '_']).next())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Self::En,
            "it" => Self::It,
            _ => fallback,
        }
    }
}

// ── Lenient field access ──
//
// A field of the wrong shape (object, array, stray type) reads as empty
// instead of failing the whole record.

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Int(n) => Some(n.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagList {
    List(Vec<Option<Scalar>>),
    Other(IgnoredAny),
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .and_then(Scalar::into_text)
        .unwrap_or_default())
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(n)) => Some(n as f64),
        Some(Scalar::Float(f)) => Some(f),
        Some(Scalar::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<TagList>::deserialize(deserializer)? {
        Some(TagList::List(items)) => items
            .into_iter()
            .flatten()
            .filter_map(Scalar::into_text)
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_feed_shape() -> anyhow::Result<()> {
        let raw = r#"{
            "id": "vertigo",
            "title": "Vertigo",
            "collection": "cinema",
            "year": 2022,
            "technique": "Acrylic on glass",
            "size": "85 x 85 cm",
            "availability": "available",
            "priceEUR": 700,
            "cover": "vertigo.jpg",
            "tags": ["glass", "film"],
            "story": "Hitchcock."
        }"#;
        let record: ArtworkRecord = serde_json::from_str(raw)?;
        assert_eq!(record.id, "vertigo");
        assert_eq!(record.year, "2022");
        assert_eq!(record.availability, Availability::Available);
        assert_eq!(record.price_eur, Some(700.0));
        assert_eq!(record.tags, vec!["glass".to_owned(), "film".to_owned()]);
        Ok(())
    }

    #[test]
    fn missing_and_null_fields_become_empty() -> anyhow::Result<()> {
        let record: ArtworkRecord =
            serde_json::from_str(r#"{"id": "x", "size": null, "tags": null, "priceEUR": null}"#)?;
        assert_eq!(record.size, "");
        assert_eq!(record.story, "");
        assert!(record.tags.is_empty());
        assert_eq!(record.price_eur, None);
        assert_eq!(record.availability, Availability::Unspecified);
        Ok(())
    }

    #[test]
    fn wrong_shaped_fields_read_as_empty() -> anyhow::Result<()> {
        let record: ArtworkRecord = serde_json::from_str(
            r#"{
                "id": "b",
                "title": {"it": "B", "en": "B"},
                "year": [2020],
                "availability": {"state": "sold"},
                "priceEUR": {"amount": 10},
                "tags": "glass",
                "story": "kept"
            }"#,
        )?;
        assert_eq!(record.id, "b");
        assert_eq!(record.title, "");
        assert_eq!(record.year, "");
        assert_eq!(record.availability, Availability::Unspecified);
        assert_eq!(record.price_eur, None);
        assert!(record.tags.is_empty());
        assert_eq!(record.story, "kept");

        let record: ArtworkRecord =
            serde_json::from_str(r#"{"id": "c", "tags": ["glass", {"x": 1}, null, 3]}"#)?;
        assert_eq!(record.tags, vec!["glass".to_owned(), "3".to_owned()]);
        Ok(())
    }

    #[test]
    fn unknown_availability_is_unspecified() -> anyhow::Result<()> {
        let record: ArtworkRecord =
            serde_json::from_str(r#"{"id": "x", "availability": "reserved"}"#)?;
        assert_eq!(record.availability, Availability::Unspecified);
        assert_eq!(Availability::parse(" SOLD "), Availability::Sold);
        Ok(())
    }

    #[test]
    fn filter_keys_parse() {
        assert_eq!(FilterKey::parse("all"), FilterKey::All);
        assert_eq!(FilterKey::parse("polaroid"), FilterKey::Section(Section::Polaroid));
        assert_eq!(
            FilterKey::parse("glass"),
            FilterKey::Collection("glass".to_owned())
        );
        assert_eq!(FilterKey::parse("cinema").as_str(), "cinema");
    }

    #[test]
    fn locale_reads_primary_subtag() {
        assert_eq!(Locale::from_lang(Some("en-GB"), Locale::It), Locale::En);
        assert_eq!(Locale::from_lang(Some("it"), Locale::En), Locale::It);
        assert_eq!(Locale::from_lang(Some(""), Locale::It), Locale::It);
        assert_eq!(Locale::from_lang(None, Locale::En), Locale::En);
        assert_eq!(Locale::from_lang(Some("fr"), Locale::It), Locale::It);
    }
}
