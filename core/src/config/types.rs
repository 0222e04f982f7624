//! Site configuration types

use crate::error::{ConfigError, Result};
use crate::router::{RoutePath, ScrollBehavior, DEFAULT_MAX_HISTORY};
use crate::site::SiteContent;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to display for a path that names no page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotFoundMode {
    /// Render the "Page not found" page
    #[default]
    Page,
    /// Render an empty body
    Blank,
}

impl NotFoundMode {
    /// Get the config string for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            NotFoundMode::Page => "page",
            NotFoundMode::Blank => "blank",
        }
    }
}

impl std::str::FromStr for NotFoundMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page" => Ok(NotFoundMode::Page),
            "blank" => Ok(NotFoundMode::Blank),
            _ => Err(ConfigError::InvalidValue {
                field: "not_found".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

fn default_site_name() -> String {
    "Blink OS".to_string()
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Resolved site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Name shown in page titles
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Path the browser starts at (defaults to `/`)
    #[serde(default)]
    pub initial_path: Option<String>,
    /// Scroll reset behavior after navigation
    #[serde(default)]
    pub scroll_behavior: ScrollBehavior,
    /// What unknown paths display
    #[serde(default)]
    pub not_found: NotFoundMode,
    /// Maximum number of session history entries
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Replacement content file
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Directory the static export is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl SiteConfig {
    /// Path the browser starts at
    pub fn initial_path(&self) -> RoutePath {
        self.initial_path
            .as_deref()
            .map(RoutePath::from_location)
            .unwrap_or_else(RoutePath::root)
    }

    /// Site content: the replacement file if one is configured, else the
    /// embedded default
    pub async fn load_content(&self) -> Result<SiteContent> {
        match &self.content_path {
            Some(path) => SiteContent::from_path(path).await,
            None => SiteContent::load_default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_history".to_string(),
                value: "0".to_string(),
            });
        }

        if let Some(path) = &self.initial_path {
            if !path.is_empty() && !path.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: "initial_path".to_string(),
                    value: path.clone(),
                });
            }
        }

        if self.site_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "site_name".to_string(),
                value: self.site_name.clone(),
            });
        }

        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            initial_path: None,
            scroll_behavior: ScrollBehavior::default(),
            not_found: NotFoundMode::default(),
            max_history: default_max_history(),
            content_path: None,
            output_dir: default_output_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site_name, "Blink OS");
        assert_eq!(config.initial_path().as_str(), "/");
        assert_eq!(config.scroll_behavior, ScrollBehavior::Smooth);
        assert_eq!(config.not_found, NotFoundMode::Page);
        assert_eq!(config.max_history, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "not_found": "blank", "scroll_behavior": "instant" }"#)
                .unwrap();
        assert_eq!(config.not_found, NotFoundMode::Blank);
        assert_eq!(config.scroll_behavior, ScrollBehavior::Instant);
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_validation_errors() {
        let config = SiteConfig {
            max_history: 0,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SiteConfig {
            initial_path: Some("demo".to_string()),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SiteConfig {
            initial_path: Some("/demo".to_string()),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_path().as_str(), "/demo");
    }

    #[tokio::test]
    async fn test_load_content_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        let mut content = SiteContent::load_default().unwrap();
        content.brand.tagline = "Custom tagline".to_string();
        std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let config = SiteConfig {
            content_path: Some(path),
            ..SiteConfig::default()
        };
        let loaded = config.load_content().await.unwrap();
        assert_eq!(loaded.brand.tagline, "Custom tagline");

        let default = SiteConfig::default().load_content().await.unwrap();
        assert_ne!(default.brand.tagline, "Custom tagline");
    }

    #[test]
    fn test_not_found_mode_from_str() {
        assert_eq!("page".parse::<NotFoundMode>().unwrap(), NotFoundMode::Page);
        assert_eq!("BLANK".parse::<NotFoundMode>().unwrap(), NotFoundMode::Blank);
        assert!("404".parse::<NotFoundMode>().is_err());
    }
}
