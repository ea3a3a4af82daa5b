//! Viewer Configuration
//!
//! Fixed when the bundle is built. Override with `LINKBACK_VIEWER_SERVER_ROOT`,
//! `LINKBACK_VIEWER_VARIANT` and `LINKBACK_VIEWER_DOI_SCHEME` at compile time;
//! nothing is read at runtime.

use crate::logging::log_warn;
use crate::terminology::Terminology;

pub const DEFAULT_SERVER_ROOT: &str = "http://localhost:8080/";
pub const DEFAULT_DOI_SCHEME: &str = "info:doi/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Service root, always ending in `/`
    pub server_root: String,
    /// URI scheme prefix stripped from article identifiers
    pub doi_scheme: String,
    pub terminology: Terminology,
}

impl ViewerConfig {
    pub fn new(server_root: &str, terminology: Terminology) -> Self {
        let mut server_root = server_root.trim().to_string();
        if !server_root.ends_with('/') {
            server_root.push('/');
        }
        Self {
            server_root,
            doi_scheme: DEFAULT_DOI_SCHEME.to_string(),
            terminology,
        }
    }

    pub fn with_doi_scheme(mut self, doi_scheme: &str) -> Self {
        self.doi_scheme = doi_scheme.to_string();
        self
    }

    /// Configuration baked in by the build
    pub fn from_build_env() -> Self {
        let root = option_env!("LINKBACK_VIEWER_SERVER_ROOT").unwrap_or(DEFAULT_SERVER_ROOT);
        let terminology = match option_env!("LINKBACK_VIEWER_VARIANT") {
            Some(name) => name.parse().unwrap_or_else(|e| {
                log_warn(&format!("[CONFIG] {}, using {}", e, Terminology::default()));
                Terminology::default()
            }),
            None => Terminology::default(),
        };
        let config = Self::new(root, terminology);
        match option_env!("LINKBACK_VIEWER_DOI_SCHEME") {
            Some(scheme) => config.with_doi_scheme(scheme),
            None => config,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_ROOT, Terminology::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_root_gets_trailing_slash() {
        let config = ViewerConfig::new("http://example.org/rhino", Terminology::Pingbacks);
        assert_eq!(config.server_root, "http://example.org/rhino/");
        assert_eq!(ViewerConfig::new("http://example.org/", Terminology::Linkbacks).server_root, "http://example.org/");
    }

    #[test]
    fn test_build_config_without_overrides() {
        if option_env!("LINKBACK_VIEWER_SERVER_ROOT").is_none()
            && option_env!("LINKBACK_VIEWER_VARIANT").is_none()
            && option_env!("LINKBACK_VIEWER_DOI_SCHEME").is_none()
        {
            assert_eq!(ViewerConfig::from_build_env(), ViewerConfig::default());
        }
    }

    #[test]
    fn test_doi_scheme_override() {
        let config = ViewerConfig::default().with_doi_scheme("doi:");
        assert_eq!(config.doi_scheme, "doi:");
        assert_eq!(config.server_root, "http://localhost:8080/");
    }

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.server_root, "http://localhost:8080/");
        assert_eq!(config.doi_scheme, "info:doi/");
        assert_eq!(config.terminology, Terminology::Linkbacks);
    }
}
