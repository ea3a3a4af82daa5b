//! Fetch Workflow
//!
//! The listing is loaded once; each row then fetches its own details when
//! triggered. Generic over `LinkSource` so the same flow runs against the
//! JSONP service in the browser and an in-memory source in tests.

use std::future::Future;

use leptos::prelude::*;

use crate::logging::log_info;
use crate::models::ArticleSummary;
use crate::notify::Notice;
use crate::row_state::RowState;
use crate::source::LinkSource;

/// One-shot listing fetch. On failure nothing is rendered.
pub async fn load_listing<S: LinkSource + ?Sized>(source: &S) -> Result<Vec<ArticleSummary>, Notice> {
    match source.list_articles().await {
        Ok(articles) => {
            log_info(&format!("[APP] Loaded {} articles", articles.len()));
            Ok(articles)
        }
        Err(err) => Err(Notice::from_failure("APP", &err)),
    }
}

/// Activate a row and hand back its detail fetch.
///
/// The trigger is disabled before this returns, so the row is already
/// `Loading` while the request is still unissued. A row that was triggered
/// before yields `None` and no request.
pub fn trigger_row<S>(
    source: S,
    article: ArticleSummary,
    state: RwSignal<RowState>,
) -> Option<impl Future<Output = Option<Notice>>>
where
    S: LinkSource + 'static,
{
    if !state.try_update(RowState::activate).unwrap_or(false) {
        return None;
    }
    log_info(&format!("[ROW] Fetching details for {}", article.identifier));
    Some(async move {
        let result = source.article_links(&article).await;
        let notice = result.as_ref().err().map(|err| Notice::from_failure("ROW", err));
        // A row that has gone away no longer has a signal; the result is dropped.
        state.try_update(|s| s.settle(result));
        notice
    })
}
