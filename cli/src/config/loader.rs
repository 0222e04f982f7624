//! Site configuration loader for the blink CLI
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./blink.json or ./.blink/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/blink/config.json or the platform config dir
//! 4. Built-in defaults (no files)

use anyhow::{anyhow, Context, Result};
use blink_core::{NotFoundMode, ScrollBehavior, SiteConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    path_override: Option<String>,
    not_found_override: Option<NotFoundMode>,
    instant_scroll: bool,
    output_override: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set initial path override
    pub fn with_path_override(mut self, path: String) -> Self {
        self.path_override = Some(path);
        self
    }

    /// Set not-found mode override
    pub fn with_not_found_override(mut self, mode: NotFoundMode) -> Self {
        self.not_found_override = Some(mode);
        self
    }

    /// Force instant scroll resets
    pub fn with_instant_scroll(mut self, instant: bool) -> Self {
        self.instant_scroll = instant;
        self
    }

    /// Set export directory override
    pub fn with_output_override(mut self, dir: PathBuf) -> Self {
        self.output_override = Some(dir);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<SiteConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(path) = &self.path_override {
            config.initial_path = Some(path.clone());
        }
        if let Some(mode) = self.not_found_override {
            config.not_found = mode;
        }
        if self.instant_scroll {
            config.scroll_behavior = ScrollBehavior::Instant;
        }
        if let Some(dir) = &self.output_override {
            config.output_dir = dir.clone();
        }

        // Step 3: Validate
        config
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<SiteConfig> {
        for candidate in self.candidates()? {
            if candidate.exists() {
                debug!("Using config file {}", candidate.display());
                return self.load_file(&candidate).await;
            }
        }

        debug!("No config file found, using defaults");
        Ok(SiteConfig::default())
    }

    /// Config file locations, highest priority first
    fn candidates(&self) -> Result<Vec<PathBuf>> {
        let cwd = std::env::current_dir()?;
        let mut candidates = vec![
            cwd.join("blink.json"),
            cwd.join(".blink").join("config.json"),
        ];

        if let Some(config_dir) = self.get_xdg_config_dir() {
            candidates.push(config_dir.join("blink").join("config.json"));
        }

        Ok(candidates)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<SiteConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<SiteConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Relative content paths are relative to the config file
        if let (Some(content_path), Some(parent)) = (&config.content_path, path.parent()) {
            if content_path.is_relative() {
                config.content_path = Some(parent.join(content_path));
            }
        }

        Ok(config)
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_from_file_with_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("site.json");
        std::fs::write(
            &file,
            r#"{ "site_name": "Blink", "not_found": "blank", "content_path": "content.json" }"#,
        )
        .unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(file)
            .with_path_override("/demo".to_string())
            .with_instant_scroll(true)
            .load()
            .await
            .unwrap();

        assert_eq!(config.site_name, "Blink");
        assert_eq!(config.not_found, NotFoundMode::Blank);
        assert_eq!(config.initial_path().as_str(), "/demo");
        assert_eq!(config.scroll_behavior, ScrollBehavior::Instant);
        assert_eq!(
            config.content_path,
            Some(temp_dir.path().join("content.json"))
        );
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.json"), r#"{ "max_history": 5 }"#).unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(temp_dir.path().to_path_buf())
            .load()
            .await
            .unwrap();
        assert_eq!(config.max_history, 5);
    }

    #[tokio::test]
    async fn test_missing_override_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = CliConfigLoader::new()
            .with_config_override(temp_dir.path().join("missing.json"))
            .load()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_override_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.json");
        std::fs::write(&file, r#"{ "max_history": 0 }"#).unwrap();

        let result = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .await;
        assert!(result.is_err());
    }
}
