//! Detail View Component
//!
//! Renders a row's `RowState` into its detail cell.

use leptos::prelude::*;

use crate::detail::{build_detail_table, detail_heading, DetailCell, DetailTable};
use crate::row_state::RowState;
use crate::terminology::Terminology;

#[component]
pub fn DetailView(
    title: String,
    terminology: Terminology,
    state: RwSignal<RowState>,
) -> impl IntoView {
    move || {
        state.with(|current| match current {
            RowState::Idle => ().into_any(),
            RowState::Loading => view! {
                <span>
                    <h3>{detail_heading(terminology, &title)}</h3>
                    <p class="loading">"Loading..."</p>
                </span>
            }
            .into_any(),
            RowState::Populated(records) => {
                let table = build_detail_table(terminology, &title, records);
                detail_table_view(table, terminology)
            }
            // Failed rows keep only the heading
            RowState::Stalled(_) => view! {
                <span>
                    <h3>{detail_heading(terminology, &title)}</h3>
                </span>
            }
            .into_any(),
        })
    }
}

fn detail_table_view(table: DetailTable, terminology: Terminology) -> AnyView {
    let DetailTable { heading, headers, rows } = table;
    let table_class = terminology.query_param();
    view! {
        <span>
            <h3>{heading}</h3>
            <table class=table_class>
                <thead>
                    <tr>{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! { <tr>{row.into_iter().map(cell_view).collect_view()}</tr> })
                        .collect_view()}
                </tbody>
            </table>
        </span>
    }
    .into_any()
}

fn cell_view(cell: DetailCell) -> AnyView {
    let text = cell.text().to_string();
    match cell {
        DetailCell::Link { href, .. } => view! { <td><a href=href>{text}</a></td> }.into_any(),
        DetailCell::Text(_) => view! { <td>{text}</td> }.into_any(),
    }
}
