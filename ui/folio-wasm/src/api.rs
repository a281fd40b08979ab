//! Feed fetching.
//!
//! `BrowserFeed` is the `FeedSource` used in the page: a no-store GET
//! through `gloo-net`. Status and transport failures are reported as
//! `FolioError`s and recovered by the catalog loader.

use async_trait::async_trait;
use folio_core::{FeedSource, FolioError, FolioResult, Origin};
use gloo_net::http::Request;
use web_sys::RequestCache;

pub struct BrowserFeed;

#[async_trait(?Send)]
impl FeedSource for BrowserFeed {
    async fn fetch(&self, url: &str) -> FolioResult<String> {
        let resp = Request::get(url)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| FolioError::transport(e.to_string()))?;

        if !resp.ok() {
            return Err(FolioError::Status(resp.status()));
        }

        resp.text()
            .await
            .map_err(|e| FolioError::transport(format!("body read failed: {e}")))
    }
}

/// `file:` pages cannot fetch the feed.
pub fn origin() -> Origin {
    let protocol = gloo_utils::window()
        .location()
        .protocol()
        .unwrap_or_else(|_| "http:".into());
    Origin::from_protocol(&protocol)
}

/// Token for the `cb` query parameter.
pub fn cache_token() -> u64 {
    js_sys::Date::now() as u64
}
