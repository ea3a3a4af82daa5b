//! UI Components
//!
//! Leptos components for the article table and its lazily filled detail rows.

mod article_table;
mod article_row;
mod detail_view;

pub use article_table::ArticleTable;
pub use article_row::ArticleRow;
pub use detail_view::DetailView;
