//! Article Table Component
//!
//! One `ArticleRow` per listed article, in listing order.

use leptos::prelude::*;

use crate::components::ArticleRow;
use crate::models::ArticleSummary;
use crate::source::JsonpSource;
use crate::table::{build_rows, summary_headers};

#[component]
pub fn ArticleTable(
    #[prop(into)] articles: Signal<Vec<ArticleSummary>>,
    source: JsonpSource,
) -> impl IntoView {
    let terminology = source.config().terminology;
    let rows_source = source.clone();

    view! {
        <table class="articles">
            <thead>
                <tr>
                    {summary_headers(terminology)
                        .into_iter()
                        .map(|header| view! { <th>{header}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || build_rows(&articles.get(), rows_source.config())
                    key=|row| (row.index, row.article.identifier.clone())
                    children=move |row| {
                        view! { <ArticleRow row=row source=source.clone() /> }
                    }
                />
            </tbody>
        </table>
    }
}
