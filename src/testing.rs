//! In-memory `LinkSource` for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{ArticleSummary, LinkRecord};
use crate::source::LinkSource;

pub fn article(doi: &str, title: &str, count: u64, recent: &str) -> ArticleSummary {
    ArticleSummary {
        identifier: doi.to_string(),
        title: title.to_string(),
        link_count: count,
        most_recent_link: recent.to_string(),
        article_url: None,
    }
}

/// Canned responses keyed by article identifier. Clones share call counters.
#[derive(Clone, Default)]
pub struct FakeSource {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    listing: RefCell<Option<Result<Vec<ArticleSummary>, FetchError>>>,
    details: RefCell<HashMap<String, Result<Vec<LinkRecord>, FetchError>>>,
    listing_calls: Cell<usize>,
    detail_calls: Cell<usize>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(self, articles: Vec<ArticleSummary>) -> Self {
        *self.inner.listing.borrow_mut() = Some(Ok(articles));
        self
    }

    pub fn with_listing_error(self, err: FetchError) -> Self {
        *self.inner.listing.borrow_mut() = Some(Err(err));
        self
    }

    pub fn with_details(self, identifier: &str, records: Vec<LinkRecord>) -> Self {
        self.inner.details.borrow_mut().insert(identifier.to_string(), Ok(records));
        self
    }

    pub fn with_detail_error(self, identifier: &str, err: FetchError) -> Self {
        self.inner.details.borrow_mut().insert(identifier.to_string(), Err(err));
        self
    }

    pub fn listing_calls(&self) -> usize {
        self.inner.listing_calls.get()
    }

    pub fn detail_calls(&self) -> usize {
        self.inner.detail_calls.get()
    }
}

#[async_trait(?Send)]
impl LinkSource for FakeSource {
    async fn list_articles(&self) -> Result<Vec<ArticleSummary>, FetchError> {
        self.inner.listing_calls.set(self.inner.listing_calls.get() + 1);
        self.inner.listing.borrow().clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn article_links(&self, article: &ArticleSummary) -> Result<Vec<LinkRecord>, FetchError> {
        self.inner.detail_calls.set(self.inner.detail_calls.get() + 1);
        self.inner
            .details
            .borrow()
            .get(&article.identifier)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
