//! Detail Table Construction
//!
//! Builds the per-article table from fetched records as plain data.
//! `DetailView` only turns it into markup.

use crate::models::LinkRecord;
use crate::terminology::{DetailColumn, Terminology};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailCell {
    Text(String),
    Link { href: String, text: String },
}

impl DetailCell {
    pub fn text(&self) -> &str {
        match self {
            DetailCell::Text(text) | DetailCell::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailTable {
    pub heading: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<DetailCell>>,
}

/// `Linkbacks for "<title>"`
pub fn detail_heading(terminology: Terminology, article_title: &str) -> String {
    format!("{} for \"{}\"", terminology.label(), article_title)
}

pub fn build_detail_table(
    terminology: Terminology,
    article_title: &str,
    records: &[LinkRecord],
) -> DetailTable {
    let columns = terminology.detail_columns();
    DetailTable {
        heading: detail_heading(terminology, article_title),
        headers: columns.iter().map(|c| c.header()).collect(),
        rows: records
            .iter()
            .map(|record| columns.iter().map(|&c| cell(record, c)).collect())
            .collect(),
    }
}

fn cell(record: &LinkRecord, column: DetailColumn) -> DetailCell {
    match column {
        DetailColumn::Title => DetailCell::Text(record.title.clone()),
        DetailColumn::Url => DetailCell::Link {
            href: record.url.clone(),
            text: record.url.clone(),
        },
        DetailColumn::Created => DetailCell::Text(record.created.clone()),
        DetailColumn::SourceName => DetailCell::Text(record.source_name.clone()),
        DetailColumn::Excerpt => DetailCell::Text(record.excerpt.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, url: &str, created: &str) -> LinkRecord {
        LinkRecord {
            title: title.to_string(),
            url: url.to_string(),
            created: created.to_string(),
            source_name: String::new(),
            excerpt: String::new(),
        }
    }

    fn texts(table: &DetailTable) -> Vec<Vec<&str>> {
        table.rows.iter().map(|row| row.iter().map(DetailCell::text).collect()).collect()
    }

    #[test]
    fn test_pingback_table() {
        let table = build_detail_table(Terminology::Pingbacks, "T1", &[record("B1", "http://b/1", "2020-01-02")]);
        assert_eq!(table.heading, "Pingbacks for \"T1\"");
        assert_eq!(table.headers, vec!["Title", "URL", "Created"]);
        assert_eq!(texts(&table), vec![vec!["B1", "http://b/1", "2020-01-02"]]);
        assert_eq!(
            table.rows[0][1],
            DetailCell::Link { href: "http://b/1".to_string(), text: "http://b/1".to_string() }
        );
    }

    #[test]
    fn test_linkback_table_adds_source_and_excerpt() {
        let mut linkback = record("B1", "http://b/1", "2020-01-02");
        linkback.source_name = "Some Blog".to_string();
        linkback.excerpt = "cites the paper".to_string();
        let table = build_detail_table(Terminology::Linkbacks, "T1", &[linkback]);
        assert_eq!(table.heading, "Linkbacks for \"T1\"");
        assert_eq!(table.headers.len(), 5);
        assert_eq!(texts(&table)[0][3..], ["Some Blog", "cites the paper"]);
    }

    #[test]
    fn test_no_records_still_has_header() {
        let table = build_detail_table(Terminology::Linkbacks, "Empty", &[]);
        assert_eq!(table.headers.len(), 5);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_rows_follow_record_order() {
        let records = [record("A", "u1", "1"), record("B", "u2", "2"), record("C", "u3", "3")];
        let table = build_detail_table(Terminology::Pingbacks, "T", &records);
        let titles: Vec<_> = table.rows.iter().map(|r| r[0].text()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }
}
