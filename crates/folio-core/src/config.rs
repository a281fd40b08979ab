//! Page configuration.
//!
//! Every field has a default matching the published site, so an empty
//! inline `folioConfig` block (or none at all) yields a working page.

use crate::error::{FolioError, FolioResult};
use folio_types::Locale;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub feed_url: String,
    pub image_base: String,
    pub recipient: String,
    pub subject_prefix: String,
    pub artwork_close_ms: u32,
    pub curated_close_ms: u32,
    pub reveal_threshold: f64,
    pub default_locale: Locale,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            feed_url: "assets/data/artworks.json".to_owned(),
            image_base: "assets/img/".to_owned(),
            recipient: "andrea.cr790@gmail.com".to_owned(),
            subject_prefix: "Contatto dal sito CRART_AC".to_owned(),
            artwork_close_ms: 250,
            curated_close_ms: 230,
            reveal_threshold: 0.15,
            default_locale: Locale::It,
        }
    }
}

impl PageConfig {
    /// Parse an inline override block. Absent keys keep their defaults.
    pub fn from_json(raw: &str) -> FolioResult<Self> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.feed_url.trim().is_empty() {
            return Err(FolioError::config("feedUrl cannot be empty"));
        }
        if !self.recipient.contains('@') {
            return Err(FolioError::config(format!(
                "recipient `{}` is not a mail address",
                self.recipient
            )));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::config(format!(
                "revealThreshold {} outside 0..=1",
                self.reveal_threshold
            )));
        }
        Ok(())
    }

    /// Resolve an image reference against `image_base`. Empty covers stay empty.
    pub fn image_src(&self, cover: &str) -> String {
        if cover.is_empty() {
            return String::new();
        }
        format!("{}{}", self.image_base, cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_keeps_defaults() -> anyhow::Result<()> {
        assert_eq!(PageConfig::from_json("{}")?, PageConfig::default());
        Ok(())
    }

    #[test]
    fn partial_override() -> anyhow::Result<()> {
        let config = PageConfig::from_json(
            r#"{"recipient": "studio@example.com", "defaultLocale": "en", "curatedCloseMs": 300}"#,
        )?;
        assert_eq!(config.recipient, "studio@example.com");
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.curated_close_ms, 300);
        assert_eq!(config.artwork_close_ms, 250);
        Ok(())
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            PageConfig::from_json(r#"{"revealThreshold": 1.5}"#),
            Err(FolioError::Config(_))
        ));
        assert!(matches!(
            PageConfig::from_json(r#"{"recipient": "nobody"}"#),
            Err(FolioError::Config(_))
        ));
        assert!(matches!(
            PageConfig::from_json(r#"{"feedUrl": " "}"#),
            Err(FolioError::Config(_))
        ));
        assert!(matches!(PageConfig::from_json("["), Err(FolioError::Parse(_))));
    }

    #[test]
    fn image_src_prefixes_base() {
        let config = PageConfig::default();
        assert_eq!(config.image_src("a.jpg"), "assets/img/a.jpg");
        assert_eq!(config.image_src(""), "");
    }
}
