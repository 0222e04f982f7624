//! Static export command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use blink_core::site::export_site;
use tracing::info;

/// Write the static site to the configured output directory
pub async fn export_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let content = config
        .load_content()
        .await
        .context("Failed to load site content")?;

    info!("Exporting site to {}", config.output_dir.display());

    let report = export_site(&config, &content, &config.output_dir)
        .await
        .with_context(|| format!("Failed to export to {}", config.output_dir.display()))?;

    println!("📦 Exported {} pages\n", report.len());
    for file in &report.files {
        let relative = file.strip_prefix(&report.out_dir).unwrap_or(file);
        println!("  {}", relative.display());
    }

    Ok(())
}
