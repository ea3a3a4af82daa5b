//! Article Table Model
//!
//! What each summary row shows, computed from the listing before any view
//! code runs. Every article gets a summary row followed by a hidden detail
//! row; `ArticleRow` renders both from one `ArticleRowModel`.

use crate::config::ViewerConfig;
use crate::identity::normalize;
use crate::models::ArticleSummary;
use crate::terminology::Terminology;

/// Columns in a summary row, including the trigger. The detail cell spans all of them.
pub const SUMMARY_COLUMNS: usize = 5;

pub const TRIGGER_LABEL: &str = "Fetch";

#[derive(Debug, Clone, PartialEq)]
pub enum IdentifierCell {
    Text(String),
    Link { href: String, text: String },
}

impl IdentifierCell {
    pub fn text(&self) -> &str {
        match self {
            IdentifierCell::Text(text) | IdentifierCell::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRowModel {
    /// Position in the listing, also the row key
    pub index: usize,
    pub article: ArticleSummary,
    pub identifier: IdentifierCell,
    pub link_count: String,
}

impl ArticleRowModel {
    pub fn new(index: usize, article: ArticleSummary, config: &ViewerConfig) -> Self {
        let text = normalize(&article.identifier, &config.doi_scheme).to_string();
        let identifier = match (&article.article_url, config.terminology.links_identifier()) {
            (Some(href), true) => IdentifierCell::Link { href: href.clone(), text },
            _ => IdentifierCell::Text(text),
        };
        let link_count = article.link_count.to_string();
        Self { index, article, identifier, link_count }
    }

    /// Text of the data cells, trigger excluded
    pub fn cells(&self) -> [&str; SUMMARY_COLUMNS - 1] {
        [
            self.identifier.text(),
            &self.article.title,
            &self.link_count,
            &self.article.most_recent_link,
        ]
    }
}

/// Rows in listing order; no client-side sorting
pub fn build_rows(articles: &[ArticleSummary], config: &ViewerConfig) -> Vec<ArticleRowModel> {
    articles
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, article)| ArticleRowModel::new(index, article, config))
        .collect()
}

pub fn summary_headers(terminology: Terminology) -> [&'static str; SUMMARY_COLUMNS] {
    ["DOI", "Title", terminology.label(), "Most recent", ""]
}
