//! Portfolio page logic, independent of any document.
//!
//! The wasm frontend implements the view traits (`GalleryView`,
//! `OverlayView`, `ScrollHost`) and the `FeedSource` fetcher; everything
//! else (catalog merge, filtering, presenter lifecycle, contact handoff)
//! is decided here.

pub mod card;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod curated;
pub mod detail;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod nav;
pub mod page;
pub mod presenter;
pub mod reveal;

pub use catalog::{Catalog, FeedSource, LoadReport, LoadSource, Origin, StaticCard, load_catalog};
pub use config::PageConfig;
pub use error::{FolioError, FolioResult};
pub use filter::{DisplayMode, FilterState, GalleryView};
pub use page::PageState;
pub use presenter::{Dismissal, OverlayView, PresenterKind, ScrollHost};
