//! Linkback Viewer App
//!
//! Loads the article listing once on mount and renders the article table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::ArticleTable;
use crate::config::ViewerConfig;
use crate::logging::log_info;
use crate::source::JsonpSource;
use crate::store::{listing_summary, store_finish_listing, ViewerState, ViewerStateStoreFields};
use crate::workflow::load_listing;

#[component]
pub fn App() -> impl IntoView {
    let source = JsonpSource::new(ViewerConfig::from_build_env());
    let terminology = source.config().terminology;
    let store = Store::new(ViewerState::default());

    // Listing is fetched exactly once; the effect tracks nothing
    let listing_source = source.clone();
    Effect::new(move |_| {
        let source = listing_source.clone();
        log_info(&format!("[APP] Loading {} listing from {}", terminology, source.listing_url()));
        spawn_local(async move {
            let result = load_listing(&source).await;
            if let Err(notice) = &result {
                notice.show();
            }
            store_finish_listing(&store, result);
        });
    });

    let articles = Signal::derive(move || store.articles().get());

    view! {
        <main class="linkback-viewer">
            <h1>{terminology.label()}</h1>
            <ArticleTable articles=articles source=source />
            <p class="listing-status">
                {move || listing_summary(&store.listing().get(), store.articles().with(Vec::len), terminology.label())}
            </p>
        </main>
    }
}
