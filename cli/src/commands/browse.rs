//! Interactive browse command

use crate::config::CliConfigLoader;
use crate::interactive::run_browser;
use anyhow::{Context, Result};
use tracing::debug;

/// Open the terminal browser
pub async fn browse_command(config_loader: CliConfigLoader, debug_output: bool) -> Result<()> {
    let config = config_loader.load().await?;
    if debug_output {
        debug!("Starting at: {}", config.initial_path());
        debug!("Scroll behavior: {:?}", config.scroll_behavior);
        debug!("Not found mode: {}", config.not_found.as_str());
    }

    let content = config
        .load_content()
        .await
        .context("Failed to load site content")?;

    run_browser(config, content).await
}
