//! Viewer State Store
//!
//! Uses Leptos reactive_stores for the listing shared by the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ArticleSummary;
use crate::notify::Notice;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, Default, Store)]
pub struct ViewerState {
    /// Listing in server order; stays empty if the listing fetch fails
    pub articles: Vec<ArticleSummary>,
    pub listing: ListingStatus,
}

pub type ViewerStore = Store<ViewerState>;

/// Record the one-shot listing outcome
pub fn store_finish_listing(store: &ViewerStore, result: Result<Vec<ArticleSummary>, Notice>) {
    match result {
        Ok(articles) => {
            *store.articles().write() = articles;
            *store.listing().write() = ListingStatus::Loaded;
        }
        Err(notice) => {
            *store.listing().write() = ListingStatus::Failed(notice.message);
        }
    }
}

/// Footer line under the table
pub fn listing_summary(status: &ListingStatus, count: usize, label: &str) -> String {
    match status {
        ListingStatus::Pending => "Loading...".to_string(),
        ListingStatus::Loaded => format!("{} articles with {}", count, label.to_lowercase()),
        // The failure itself was already alerted
        ListingStatus::Failed(_) => "No articles".to_string(),
    }
}
