//! Remote Listing and Detail Fetchers
//!
//! `LinkSource` is the seam between the workflow and the service.
//! `JsonpSource` reaches the real service over JSONP.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ViewerConfig;
use crate::error::FetchError;
use crate::identity::path_segment;
use crate::logging::log_info;
use crate::models::{ArticleSummary, LinkRecord};

#[async_trait(?Send)]
pub trait LinkSource {
    /// All articles with at least one linkback/pingback, in server order
    async fn list_articles(&self) -> Result<Vec<ArticleSummary>, FetchError>;

    /// Records for one article
    async fn article_links(&self, article: &ArticleSummary) -> Result<Vec<LinkRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct JsonpSource {
    config: Arc<ViewerConfig>,
}

impl JsonpSource {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// `<root>article?linkbacks` / `<root>articles?pingbacks`
    pub fn listing_url(&self) -> String {
        let terminology = self.config.terminology;
        format!(
            "{}{}?{}",
            self.config.server_root,
            terminology.listing_path(),
            terminology.query_param()
        )
    }

    /// `<root>article/<bare doi>?linkbacks` / `<root>articles/<bare doi>?pingbacks`
    pub fn detail_url(&self, article: &ArticleSummary) -> String {
        let terminology = self.config.terminology;
        format!(
            "{}{}/{}?{}",
            self.config.server_root,
            terminology.listing_path(),
            path_segment(&article.identifier, &self.config.doi_scheme),
            terminology.query_param()
        )
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log_info(&format!("[JSONP] GET {}", url));
        let payload = wasm_jsonp::request(url).await?;
        serde_wasm_bindgen::from_value(payload).map_err(|e| FetchError::protocol(e.to_string()))
    }
}

#[async_trait(?Send)]
impl LinkSource for JsonpSource {
    async fn list_articles(&self) -> Result<Vec<ArticleSummary>, FetchError> {
        self.get(&self.listing_url()).await
    }

    async fn article_links(&self, article: &ArticleSummary) -> Result<Vec<LinkRecord>, FetchError> {
        self.get(&self.detail_url(article)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminology::Terminology;

    fn article(doi: &str) -> ArticleSummary {
        ArticleSummary {
            identifier: doi.to_string(),
            title: "T".to_string(),
            link_count: 1,
            most_recent_link: String::new(),
            article_url: None,
        }
    }

    #[test]
    fn test_linkback_urls() {
        let source = JsonpSource::new(ViewerConfig::default());
        assert_eq!(source.listing_url(), "http://localhost:8080/article?linkbacks");
        assert_eq!(
            source.detail_url(&article("info:doi/10.1371/journal.pone.0001")),
            "http://localhost:8080/article/10.1371/journal.pone.0001?linkbacks"
        );
    }

    #[test]
    fn test_pingback_urls() {
        let source = JsonpSource::new(ViewerConfig::new("https://api.example.org/v1", Terminology::Pingbacks));
        assert_eq!(source.listing_url(), "https://api.example.org/v1/articles?pingbacks");
        assert_eq!(
            source.detail_url(&article("10.1/x")),
            "https://api.example.org/v1/articles/10.1/x?pingbacks"
        );
    }

    #[test]
    fn test_custom_scheme_is_stripped() {
        let config = ViewerConfig::default().with_doi_scheme("doi:");
        let source = JsonpSource::new(config);
        assert_eq!(source.detail_url(&article("doi:10.1/x")), "http://localhost:8080/article/10.1/x?linkbacks");
    }
}
