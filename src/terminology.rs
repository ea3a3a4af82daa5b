//! Linkback / Pingback Terminology
//!
//! The two service flavours share one workflow and differ only in naming,
//! request paths and the fields shown for each record.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminology {
    #[default]
    Linkbacks,
    Pingbacks,
}

/// Columns of the per-article detail table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailColumn {
    Title,
    Url,
    Created,
    SourceName,
    Excerpt,
}

impl DetailColumn {
    pub fn header(self) -> &'static str {
        match self {
            DetailColumn::Title => "Title",
            DetailColumn::Url => "URL",
            DetailColumn::Created => "Created",
            DetailColumn::SourceName => "Blog",
            DetailColumn::Excerpt => "Excerpt",
        }
    }
}

const LINKBACK_COLUMNS: &[DetailColumn] = &[
    DetailColumn::Title,
    DetailColumn::Url,
    DetailColumn::Created,
    DetailColumn::SourceName,
    DetailColumn::Excerpt,
];

const PINGBACK_COLUMNS: &[DetailColumn] = &[
    DetailColumn::Title,
    DetailColumn::Url,
    DetailColumn::Created,
];

impl Terminology {
    /// Bare query parameter selecting this flavour on the service
    pub fn query_param(self) -> &'static str {
        match self {
            Terminology::Linkbacks => "linkbacks",
            Terminology::Pingbacks => "pingbacks",
        }
    }

    /// Path under the server root that lists articles
    pub fn listing_path(self) -> &'static str {
        match self {
            Terminology::Linkbacks => "article",
            Terminology::Pingbacks => "articles",
        }
    }

    /// Capitalized plural used in headings
    pub fn label(self) -> &'static str {
        match self {
            Terminology::Linkbacks => "Linkbacks",
            Terminology::Pingbacks => "Pingbacks",
        }
    }

    /// Whether the identifier cell links to the article page
    pub fn links_identifier(self) -> bool {
        matches!(self, Terminology::Pingbacks)
    }

    pub fn detail_columns(self) -> &'static [DetailColumn] {
        match self {
            Terminology::Linkbacks => LINKBACK_COLUMNS,
            Terminology::Pingbacks => PINGBACK_COLUMNS,
        }
    }
}

impl fmt::Display for Terminology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_param())
    }
}

impl FromStr for Terminology {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linkback" | "linkbacks" => Ok(Terminology::Linkbacks),
            "pingback" | "pingbacks" => Ok(Terminology::Pingbacks),
            _ => Err(ConfigError::UnknownTerminology(s.to_string())),
        }
    }
}
