//! Article Row Component
//!
//! A summary row with a fetch button, followed by a hidden row whose single
//! cell receives the detail table once the button is pressed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DetailView;
use crate::row_state::RowState;
use crate::source::JsonpSource;
use crate::table::{ArticleRowModel, IdentifierCell, SUMMARY_COLUMNS, TRIGGER_LABEL};
use crate::workflow::trigger_row;

#[component]
pub fn ArticleRow(row: ArticleRowModel, source: JsonpSource) -> impl IntoView {
    let state = RwSignal::new(RowState::default());
    let terminology = source.config().terminology;
    let [_, title, link_count, most_recent] = row.cells().map(str::to_string);
    let ArticleRowModel { article, identifier, .. } = row;
    let detail_span = SUMMARY_COLUMNS.to_string();

    let on_fetch = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        // Second clicks land here too until the button re-renders; trigger_row ignores them.
        if let Some(fetch) = trigger_row(source.clone(), article.clone(), state) {
            spawn_local(async move {
                if let Some(notice) = fetch.await {
                    notice.show();
                }
            });
        }
    };

    let identifier_cell = match identifier {
        IdentifierCell::Text(text) => view! { <td class="doi">{text}</td> }.into_any(),
        IdentifierCell::Link { href, text } => {
            view! { <td class="doi"><a href=href>{text}</a></td> }.into_any()
        }
    };

    view! {
        <tr class="article">
            {identifier_cell}
            <td class="title">{title.clone()}</td>
            <td class="count">{link_count}</td>
            <td class="recent">{most_recent}</td>
            <td>
                <button
                    class="fetch-btn"
                    disabled=move || !state.with(RowState::trigger_enabled)
                    on:click=on_fetch
                >
                    {TRIGGER_LABEL}
                </button>
            </td>
        </tr>
        <tr
            class="detail-row"
            class:populated=move || state.with(RowState::detail_populated)
            style:display=move || if state.with(RowState::detail_visible) { "table-row" } else { "none" }
        >
            <td class="fetch" colspan=detail_span>
                <DetailView title=title terminology=terminology state=state />
            </td>
        </tr>
    }
}
