//! Frontend Models
//!
//! Records as served by the linkback/pingback endpoints. Field names follow
//! the wire format; both flavours deserialize into the same structs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One article with at least one linkback/pingback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Canonical identifier, scheme included (`info:doi/...`)
    #[serde(rename = "doi")]
    pub identifier: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub title: String,
    #[serde(rename = "linkbackCount", alias = "pingbackCount", default)]
    pub link_count: u64,
    #[serde(
        rename = "mostRecentLinkback",
        alias = "mostRecentPingback",
        default,
        deserialize_with = "opaque_text"
    )]
    pub most_recent_link: String,
    #[serde(rename = "articleUrl", default, skip_serializing_if = "Option::is_none")]
    pub article_url: Option<String>,
}

/// One recorded citation of an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default, deserialize_with = "opaque_text")]
    pub title: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub url: String,
    #[serde(rename = "created", default, deserialize_with = "opaque_text")]
    pub created: String,
    /// Linkback flavour only
    #[serde(rename = "blogName", default, deserialize_with = "opaque_text")]
    pub source_name: String,
    /// Linkback flavour only
    #[serde(default, deserialize_with = "opaque_text")]
    pub excerpt: String,
}

/// Server-formatted values shown verbatim. Dates may arrive as strings or
/// epoch numbers; null reads as empty.
fn opaque_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
