//! Single page render command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use blink_core::render::{HtmlRenderer, TextRenderer, DEFAULT_WIDTH};
use blink_core::site::{page_selector, DemoState};
use blink_core::RoutePath;
use clap::ValueEnum;
use std::io::IsTerminal;
use tracing::{debug, info};

/// Output format of `blink render`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
}

/// Text width: the terminal's when printing to one, otherwise the default
fn text_width() -> usize {
    if !std::io::stdout().is_terminal() {
        return DEFAULT_WIDTH;
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) => (cols as usize).saturating_sub(2).max(30),
        Err(_) => DEFAULT_WIDTH,
    }
}

/// Print the page for `path`
pub async fn render_command(
    config_loader: CliConfigLoader,
    path: String,
    format: RenderFormat,
    width: Option<usize>,
) -> Result<()> {
    let config = config_loader.load().await?;
    let content = config
        .load_content()
        .await
        .context("Failed to load site content")?;

    let path = RoutePath::from_location(&path);
    let selection = page_selector(config.not_found).select(&path);
    info!("Rendering {} as {:?}", path, format);
    debug!("Selected route: {:?}", selection.route());

    let page = selection.into_output();
    let output = match format {
        RenderFormat::Text => TextRenderer::new(&content, width.unwrap_or_else(text_width))
            .document(&path, page.as_ref(), &DemoState::new()),
        RenderFormat::Html => HtmlRenderer::new(&content, config.site_name.clone())?
            .document(&path, page.as_ref())?,
    };

    print!("{}", output);
    Ok(())
}
