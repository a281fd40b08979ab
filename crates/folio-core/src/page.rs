//! Page-level controller state.
//!
//! Everything the page mutates lives here and is owned by one value; the
//! wasm frontend keeps it in a single thread-local and hands views in by
//! reference.

use crate::config::PageConfig;
use crate::curated::CuratedEntry;
use crate::detail::DetailContent;
use crate::error::FolioResult;
use crate::filter::FilterState;
use crate::i18n;
use crate::nav::NavMenu;
use crate::presenter::{
    CloseTicket, Dismissal, EnterTicket, OverlayView, Presenter, PresenterKind, ScrollHost,
    ScrollLock,
};
use crate::reveal::RevealTracker;
use folio_types::Locale;
use tracing::warn;

#[derive(Debug)]
pub struct PageState {
    pub config: PageConfig,
    pub locale: Locale,
    pub filter: FilterState,
    pub nav: NavMenu,
    pub reveal: RevealTracker,
    pub scroll: ScrollLock,
    artwork: Presenter,
    cinema: Presenter,
    polaroid: Presenter,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageConfig::default(), Locale::It)
    }
}

impl PageState {
    pub fn new(config: PageConfig, locale: Locale) -> Self {
        Self {
            artwork: Presenter::new(PresenterKind::Artwork, &config),
            cinema: Presenter::new(PresenterKind::Cinema, &config),
            polaroid: Presenter::new(PresenterKind::Polaroid, &config),
            config,
            locale,
            filter: FilterState::default(),
            nav: NavMenu::default(),
            reveal: RevealTracker::default(),
            scroll: ScrollLock::default(),
        }
    }

    pub fn presenter(&self, kind: PresenterKind) -> &Presenter {
        match kind {
            PresenterKind::Artwork => &self.artwork,
            PresenterKind::Cinema => &self.cinema,
            PresenterKind::Polaroid => &self.polaroid,
        }
    }

    fn presenter_and_scroll(&mut self, kind: PresenterKind) -> (&mut Presenter, &mut ScrollLock) {
        let presenter = match kind {
            PresenterKind::Artwork => &mut self.artwork,
            PresenterKind::Cinema => &mut self.cinema,
            PresenterKind::Polaroid => &mut self.polaroid,
        };
        (presenter, &mut self.scroll)
    }

    /// Open the artwork presenter for a catalog record. `Ok(None)` when the
    /// id is not in the catalog.
    pub fn open_artwork<V: OverlayView + ScrollHost>(
        &mut self,
        id: &str,
        view: &mut V,
    ) -> FolioResult<Option<EnterTicket>> {
        let Some(item) = self.filter.catalog().get(id) else {
            warn!(id, "card references an artwork missing from the catalog");
            return Ok(None);
        };
        let content = DetailContent::artwork(item, &self.config, self.locale);
        self.open(PresenterKind::Artwork, content, view).map(Some)
    }

    pub fn open_curated<V: OverlayView + ScrollHost>(
        &mut self,
        kind: PresenterKind,
        entry: &CuratedEntry,
        view: &mut V,
    ) -> FolioResult<EnterTicket> {
        let content = DetailContent::curated(entry, self.locale);
        self.open(kind, content, view)
    }

    fn open<V: OverlayView + ScrollHost>(
        &mut self,
        kind: PresenterKind,
        content: DetailContent,
        view: &mut V,
    ) -> FolioResult<EnterTicket> {
        let (presenter, scroll) = self.presenter_and_scroll(kind);
        presenter.open(content, view, scroll)
    }

    pub fn enter(&mut self, ticket: EnterTicket, view: &mut impl OverlayView) -> bool {
        let (presenter, _) = self.presenter_and_scroll(ticket.kind);
        presenter.enter(ticket, view)
    }

    pub fn dismiss(
        &mut self,
        kind: PresenterKind,
        trigger: Dismissal,
        view: &mut impl OverlayView,
    ) -> Option<CloseTicket> {
        let (presenter, _) = self.presenter_and_scroll(kind);
        presenter.dismiss(trigger, view)
    }

    /// Escape closes every presenter that is not already closed.
    pub fn dismiss_all(&mut self, trigger: Dismissal, view: &mut impl OverlayView) -> Vec<CloseTicket> {
        PresenterKind::ALL
            .into_iter()
            .filter_map(|kind| self.dismiss(kind, trigger, view))
            .collect()
    }

    pub fn finish_close<V: OverlayView + ScrollHost>(&mut self, ticket: CloseTicket, view: &mut V) -> bool {
        let (presenter, scroll) = self.presenter_and_scroll(ticket.kind);
        presenter.finish_close(ticket, view, scroll)
    }

    /// Prefill text for the contact message when "request info" is pressed
    /// in the artwork presenter.
    pub fn commission_message(&self) -> Option<String> {
        let id = self.artwork.content()?.commission_id.as_deref()?;
        Some(i18n::commission_message(self.locale, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, LoadReport, LoadSource};
    use crate::curated::{CINEMA, POLAROID};
    use crate::filter::GalleryView;
    use crate::presenter::PresenterPhase;
    use folio_types::{ArtworkRecord, Section};

    #[derive(Default)]
    struct FakePage {
        visible: Vec<PresenterKind>,
        locked: bool,
    }

    impl OverlayView for FakePage {
        fn build(&mut self, _kind: PresenterKind) {}

        fn populate(&mut self, _kind: PresenterKind, _content: &DetailContent) {}

        fn set_visible(&mut self, kind: PresenterKind, visible: bool) {
            self.visible.retain(|k| *k != kind);
            if visible {
                self.visible.push(kind);
            }
        }

        fn set_entered(&mut self, _kind: PresenterKind, _entered: bool) {}
    }

    impl ScrollHost for FakePage {
        fn set_scroll_locked(&mut self, locked: bool) {
            self.locked = locked;
        }
    }

    struct NullGallery;

    impl GalleryView for NullGallery {
        fn set_grid_visible(&mut self, _visible: bool) {}
        fn set_section_active(&mut self, _section: Section, _active: bool) {}
        fn render_grid(&mut self, _items: &[ArtworkRecord]) {}
        fn highlight_filter(&mut self, _key: &str) {}
        fn show_catalog_error(&mut self, _message: &str) {}
    }

    fn loaded_page() -> PageState {
        let mut page = PageState::default();
        let report = LoadReport {
            catalog: Catalog::from_records([ArtworkRecord {
                id: "vertigo".into(),
                title: "Vertigo".into(),
                ..Default::default()
            }]),
            source: LoadSource::Feed,
            static_added: 0,
        };
        page.filter.show_load_result(report, Locale::It, &mut NullGallery);
        page
    }

    #[test]
    fn artwork_open_and_commission_message() -> anyhow::Result<()> {
        let mut page = loaded_page();
        let mut view = FakePage::default();

        let ticket = page.open_artwork("vertigo", &mut view)?.expect("record exists");
        assert!(page.enter(ticket, &mut view));
        assert_eq!(
            page.commission_message().as_deref(),
            Some("Richiesta informazioni per opera: vertigo")
        );
        assert!(page.open_artwork("missing", &mut view)?.is_none());
        Ok(())
    }

    #[test]
    fn escape_closes_everything_and_unlocks_once_all_finished() -> anyhow::Result<()> {
        let mut page = loaded_page();
        let mut view = FakePage::default();

        page.open_artwork("vertigo", &mut view)?;
        page.open_curated(PresenterKind::Cinema, &CINEMA[0], &mut view)?;
        page.open_curated(PresenterKind::Polaroid, &POLAROID[0], &mut view)?;
        assert!(view.locked);
        assert_eq!(view.visible.len(), 3);

        let tickets = page.dismiss_all(Dismissal::Escape, &mut view);
        assert_eq!(tickets.len(), 3);
        for (index, ticket) in tickets.into_iter().enumerate() {
            assert!(view.locked, "still locked before ticket {index}");
            assert!(page.finish_close(ticket, &mut view));
        }
        assert!(!view.locked);
        assert!(view.visible.is_empty());
        for kind in PresenterKind::ALL {
            assert_eq!(page.presenter(kind).phase(), PresenterPhase::Closed);
        }
        Ok(())
    }

    #[test]
    fn escape_with_nothing_open_is_a_no_op() {
        let mut page = PageState::default();
        let mut view = FakePage::default();
        assert!(page.dismiss_all(Dismissal::Escape, &mut view).is_empty());
        assert!(page.commission_message().is_none());
    }
}
