//! Filter engine.
//!
//! `FilterState` is the single owner of the catalog and the visible subset.
//! The page is reached only through `GalleryView`, so the engine runs the
//! same against the DOM and against the recording view used in tests.

use crate::catalog::{Catalog, LoadReport};
use crate::i18n;
use folio_types::{ArtworkRecord, FilterKey, Locale, Section};
use tracing::debug;

/// Page-side operations the filter engine needs.
pub trait GalleryView {
    fn set_grid_visible(&mut self, visible: bool);
    fn set_section_active(&mut self, section: Section, active: bool);
    /// Replace the grid's tiles with one card per item, in order.
    fn render_grid(&mut self, items: &[ArtworkRecord]);
    /// Mark the selector whose `data-filter` equals `key` active, all others inactive.
    fn highlight_filter(&mut self, key: &str);
    fn show_catalog_error(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    AllSections,
    Section(Section),
    Grid,
}

impl DisplayMode {
    pub fn for_key(key: &FilterKey) -> Self {
        match key {
            FilterKey::All => Self::AllSections,
            FilterKey::Section(section) => Self::Section(*section),
            FilterKey::Collection(_) => Self::Grid,
        }
    }

    pub fn shows_section(self, section: Section) -> bool {
        match self {
            Self::AllSections => true,
            Self::Section(active) => active == section,
            Self::Grid => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterState {
    catalog: Catalog,
    filtered: Vec<ArtworkRecord>,
    active: FilterKey,
    mode: DisplayMode,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Catalog::new())
    }
}

impl FilterState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filtered: Vec::new(),
            active: FilterKey::All,
            mode: DisplayMode::AllSections,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filtered(&self) -> &[ArtworkRecord] {
        &self.filtered
    }

    pub fn active(&self) -> &FilterKey {
        &self.active
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The visible subset as a pure function of (catalog, key).
    pub fn subset(catalog: &Catalog, key: &FilterKey) -> Vec<ArtworkRecord> {
        match key {
            FilterKey::All => catalog.records().to_vec(),
            FilterKey::Section(_) => Vec::new(),
            FilterKey::Collection(name) => catalog.in_collection(name).cloned().collect(),
        }
    }

    pub fn apply(&mut self, raw_key: &str, view: &mut dyn GalleryView) -> DisplayMode {
        let key = FilterKey::parse(raw_key);
        let mode = DisplayMode::for_key(&key);

        view.set_grid_visible(mode == DisplayMode::Grid);
        for section in Section::ALL {
            view.set_section_active(section, mode.shows_section(section));
        }

        self.filtered = Self::subset(&self.catalog, &key);
        if mode == DisplayMode::Grid {
            view.render_grid(&self.filtered);
        }
        view.highlight_filter(key.as_str());

        debug!(key = %key, mode = ?mode, visible = self.filtered.len(), "filter applied");
        self.active = key;
        self.mode = mode;
        mode
    }

    /// Adopt a finished load and show the active view (`all` unless the
    /// visitor picked another key while loading), or the empty-state message.
    pub fn show_load_result(
        &mut self,
        report: LoadReport,
        locale: Locale,
        view: &mut dyn GalleryView,
    ) -> Option<DisplayMode> {
        self.catalog = report.catalog;
        if self.catalog.is_empty() {
            self.filtered.clear();
            view.show_catalog_error(i18n::catalog_unavailable(locale));
            return None;
        }
        let key = self.active.as_str().to_owned();
        Some(self.apply(&key, view))
    }
}
