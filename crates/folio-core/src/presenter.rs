//! Detail presenter state machine.
//!
//! States: `Closed` → `Opening` → `Open` → `Closing` → `Closed`.
//! The page schedules the two asynchronous steps: `enter` on the next
//! animation frame after `open`, and `finish_close` once the close delay
//! has elapsed. Both take the ticket handed out by the preceding step and
//! ignore it if the presenter has moved on since.

use crate::config::PageConfig;
use crate::detail::DetailContent;
use crate::error::{FolioError, FolioResult};
use folio_types::Section;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenterKind {
    Artwork,
    Cinema,
    Polaroid,
}

impl PresenterKind {
    pub const ALL: [PresenterKind; 3] = [Self::Artwork, Self::Cinema, Self::Polaroid];

    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Cinema => Self::Cinema,
            Section::Polaroid => Self::Polaroid,
        }
    }

    /// Id of the lazily built overlay root.
    pub fn overlay_id(self) -> &'static str {
        match self {
            Self::Artwork => "artModal",
            Self::Cinema => "cinemaModal",
            Self::Polaroid => "polaroidModal",
        }
    }

    /// Attribute marking the close control and the backdrop.
    pub fn close_marker(self) -> &'static str {
        match self {
            Self::Artwork => "data-close",
            Self::Cinema => "data-cm-close",
            Self::Polaroid => "data-pl-close",
        }
    }

    pub fn close_delay_ms(self, config: &PageConfig) -> u32 {
        match self {
            Self::Artwork => config.artwork_close_ms,
            Self::Cinema | Self::Polaroid => config.curated_close_ms,
        }
    }
}

impl fmt::Display for PresenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Artwork => "artwork",
            Self::Cinema => "cinema",
            Self::Polaroid => "polaroid",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    CloseControl,
    Backdrop,
    Escape,
}

/// Overlay operations for one presenter kind.
pub trait OverlayView {
    /// Create the overlay markup. Called once per presenter.
    fn build(&mut self, kind: PresenterKind);
    fn populate(&mut self, kind: PresenterKind, content: &DetailContent);
    fn set_visible(&mut self, kind: PresenterKind, visible: bool);
    /// Toggle the transition class on the dialog.
    fn set_entered(&mut self, kind: PresenterKind, entered: bool);
}

pub trait ScrollHost {
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Page scroll lock shared by every presenter. The page stays locked
/// while at least one presenter holds it.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: u32,
}

impl ScrollLock {
    pub fn acquire(&mut self, host: &mut impl ScrollHost) {
        if self.holders == 0 {
            host.set_scroll_locked(true);
        }
        self.holders += 1;
    }

    pub fn release(&mut self, host: &mut impl ScrollHost) {
        if self.holders == 0 {
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            host.set_scroll_locked(false);
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterTicket {
    pub kind: PresenterKind,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket {
    pub kind: PresenterKind,
    pub delay_ms: u32,
    generation: u64,
}

#[derive(Debug)]
pub struct Presenter {
    kind: PresenterKind,
    close_delay_ms: u32,
    phase: PresenterPhase,
    built: bool,
    holds_scroll: bool,
    generation: u64,
    content: Option<DetailContent>,
}

impl Presenter {
    pub fn new(kind: PresenterKind, config: &PageConfig) -> Self {
        Self {
            kind,
            close_delay_ms: kind.close_delay_ms(config),
            phase: PresenterPhase::Closed,
            built: false,
            holds_scroll: false,
            generation: 0,
            content: None,
        }
    }

    pub fn kind(&self) -> PresenterKind {
        self.kind
    }

    pub fn phase(&self) -> PresenterPhase {
        self.phase
    }

    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }

    /// Show `content`. While opening or open the content is replaced in
    /// place; while closing the call is rejected.
    pub fn open<V: OverlayView + ScrollHost>(
        &mut self,
        content: DetailContent,
        view: &mut V,
        scroll: &mut ScrollLock,
    ) -> FolioResult<EnterTicket> {
        if self.phase == PresenterPhase::Closing {
            warn!(kind = %self.kind, "open ignored while close transition is pending");
            return Err(FolioError::PresenterClosing(self.kind));
        }
        if !self.built {
            view.build(self.kind);
            self.built = true;
        }
        view.populate(self.kind, &content);
        self.content = Some(content);

        if self.phase == PresenterPhase::Closed {
            if !self.holds_scroll {
                scroll.acquire(view);
                self.holds_scroll = true;
            }
            view.set_visible(self.kind, true);
            self.phase = PresenterPhase::Opening;
            self.generation += 1;
        }
        debug!(kind = %self.kind, phase = ?self.phase, "presenter opened");
        Ok(EnterTicket {
            kind: self.kind,
            generation: self.generation,
        })
    }

    /// Start the entry transition. Returns `false` for stale tickets.
    pub fn enter(&mut self, ticket: EnterTicket, view: &mut impl OverlayView) -> bool {
        if self.phase != PresenterPhase::Opening || ticket.generation != self.generation {
            return false;
        }
        view.set_entered(self.kind, true);
        self.phase = PresenterPhase::Open;
        true
    }

    /// Start the leave transition. `None` when already closed or closing.
    pub fn close(&mut self, view: &mut impl OverlayView) -> Option<CloseTicket> {
        match self.phase {
            PresenterPhase::Opening | PresenterPhase::Open => {
                view.set_entered(self.kind, false);
                self.phase = PresenterPhase::Closing;
                self.generation += 1;
                debug!(kind = %self.kind, "presenter closing");
                Some(CloseTicket {
                    kind: self.kind,
                    delay_ms: self.close_delay_ms,
                    generation: self.generation,
                })
            }
            PresenterPhase::Closed | PresenterPhase::Closing => None,
        }
    }

    pub fn dismiss(&mut self, trigger: Dismissal, view: &mut impl OverlayView) -> Option<CloseTicket> {
        let ticket = self.close(view);
        if ticket.is_some() {
            debug!(kind = %self.kind, trigger = ?trigger, "presenter dismissed");
        }
        ticket
    }

    /// Hide the overlay and give back the scroll lock once the delay elapsed.
    pub fn finish_close<V: OverlayView + ScrollHost>(
        &mut self,
        ticket: CloseTicket,
        view: &mut V,
        scroll: &mut ScrollLock,
    ) -> bool {
        if self.phase != PresenterPhase::Closing || ticket.generation != self.generation {
            return false;
        }
        view.set_visible(self.kind, false);
        if self.holds_scroll {
            scroll.release(view);
            self.holds_scroll = false;
        }
        self.phase = PresenterPhase::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curated::CINEMA;
    use folio_types::Locale;

    #[derive(Debug, Default)]
    struct RecordingOverlay {
        builds: usize,
        titles: Vec<String>,
        visible: bool,
        entered: bool,
        scroll_locked: bool,
    }

    impl OverlayView for RecordingOverlay {
        fn build(&mut self, _kind: PresenterKind) {
            self.builds += 1;
        }

        fn populate(&mut self, _kind: PresenterKind, content: &DetailContent) {
            self.titles.push(content.title.clone());
        }

        fn set_visible(&mut self, _kind: PresenterKind, visible: bool) {
            self.visible = visible;
        }

        fn set_entered(&mut self, _kind: PresenterKind, entered: bool) {
            self.entered = entered;
        }
    }

    impl ScrollHost for RecordingOverlay {
        fn set_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }
    }

    fn content(index: usize) -> DetailContent {
        DetailContent::curated(&CINEMA[index], Locale::It)
    }

    fn presenter() -> Presenter {
        Presenter::new(PresenterKind::Cinema, &PageConfig::default())
    }

    #[test]
    fn full_lifecycle() -> anyhow::Result<()> {
        let mut p = presenter();
        let mut view = RecordingOverlay::default();
        let mut scroll = ScrollLock::default();

        let ticket = p.open(content(0), &mut view, &mut scroll)?;
        assert_eq!(p.phase(), PresenterPhase::Opening);
        assert!(view.visible && view.scroll_locked && !view.entered);

        assert!(p.enter(ticket, &mut view));
        assert_eq!(p.phase(), PresenterPhase::Open);
        assert!(view.entered);

        let close = p.close(&mut view).expect("open presenter closes");
        assert_eq!(close.delay_ms, 230);
        assert_eq!(p.phase(), PresenterPhase::Closing);
        assert!(view.visible && view.scroll_locked && !view.entered);

        assert!(p.finish_close(close, &mut view, &mut scroll));
        assert_eq!(p.phase(), PresenterPhase::Closed);
        assert!(!view.visible && !view.scroll_locked);
        assert!(!scroll.is_locked());
        Ok(())
    }

    #[test]
    fn every_dismissal_restores_scroll() -> anyhow::Result<()> {
        for trigger in [Dismissal::CloseControl, Dismissal::Backdrop, Dismissal::Escape] {
            let mut p = presenter();
            let mut view = RecordingOverlay::default();
            let mut scroll = ScrollLock::default();

            p.open(content(1), &mut view, &mut scroll)?;
            let close = p.dismiss(trigger, &mut view).expect("opening presenter closes");
            assert!(p.finish_close(close, &mut view, &mut scroll));
            assert!(!view.scroll_locked, "{trigger:?}");
        }
        Ok(())
    }

    #[test]
    fn reopen_while_open_replaces_content_in_place() -> anyhow::Result<()> {
        let mut p = presenter();
        let mut view = RecordingOverlay::default();
        let mut scroll = ScrollLock::default();

        let first = p.open(content(0), &mut view, &mut scroll)?;
        p.enter(first, &mut view);
        let second = p.open(content(1), &mut view, &mut scroll)?;
        assert!(!p.enter(second, &mut view));
        assert_eq!(p.phase(), PresenterPhase::Open);
        assert_eq!(view.builds, 1);
        assert_eq!(view.titles, vec!["PERSONA".to_owned(), "VERTIGO".to_owned()]);
        assert_eq!(p.content().map(|c| c.title.as_str()), Some("VERTIGO"));

        let close = p.close(&mut view).expect("open presenter closes");
        p.finish_close(close, &mut view, &mut scroll);
        assert!(!scroll.is_locked());
        Ok(())
    }

    #[test]
    fn open_during_close_is_rejected() -> anyhow::Result<()> {
        let mut p = presenter();
        let mut view = RecordingOverlay::default();
        let mut scroll = ScrollLock::default();

        p.open(content(0), &mut view, &mut scroll)?;
        let close = p.close(&mut view).expect("opening presenter closes");
        assert!(matches!(
            p.open(content(1), &mut view, &mut scroll),
            Err(FolioError::PresenterClosing(PresenterKind::Cinema))
        ));
        assert!(p.finish_close(close, &mut view, &mut scroll));
        assert!(!view.scroll_locked);
        Ok(())
    }

    #[test]
    fn stale_tickets_are_ignored() -> anyhow::Result<()> {
        let mut p = presenter();
        let mut view = RecordingOverlay::default();
        let mut scroll = ScrollLock::default();

        let enter = p.open(content(0), &mut view, &mut scroll)?;
        let close = p.close(&mut view).expect("opening presenter closes");
        assert!(!p.enter(enter, &mut view));
        assert!(p.finish_close(close, &mut view, &mut scroll));
        assert!(!p.finish_close(close, &mut view, &mut scroll));
        assert!(p.close(&mut view).is_none());
        Ok(())
    }

    #[test]
    fn scroll_lock_counts_holders() {
        let mut host = RecordingOverlay::default();
        let mut lock = ScrollLock::default();
        lock.acquire(&mut host);
        lock.acquire(&mut host);
        lock.release(&mut host);
        assert!(host.scroll_locked);
        lock.release(&mut host);
        assert!(!host.scroll_locked);
        lock.release(&mut host);
        assert!(!lock.is_locked());
    }

    #[test]
    fn close_delays_follow_kind() {
        let config = PageConfig::default();
        assert_eq!(PresenterKind::Artwork.close_delay_ms(&config), 250);
        assert_eq!(PresenterKind::Polaroid.close_delay_ms(&config), 230);
    }
}
